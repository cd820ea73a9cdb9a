use crate::selectors::Sel;
use serde::{Deserialize, Serialize};

/// Where a field's value is read from once an element matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    /// All descendant text of the element.
    #[default]
    Text,
    /// A named attribute of the element.
    Attr(String),
}

/// Selector chain for one field. The first selector that matches wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub selectors: Vec<Sel>,
    #[serde(default)]
    pub source: ValueSource,
}

impl FieldRule {
    pub fn text(selectors: &[&str]) -> Self {
        Self {
            selectors: selectors.iter().map(|s| Sel::new(s)).collect(),
            source: ValueSource::Text,
        }
    }

    pub fn attr(selectors: &[&str], attr: &str) -> Self {
        Self {
            selectors: selectors.iter().map(|s| Sel::new(s)).collect(),
            source: ValueSource::Attr(attr.to_string()),
        }
    }
}

/// Extraction rules for a listing page template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionRules {
    pub name: FieldRule,
    pub image: FieldRule,
    pub description: FieldRule,
    pub price: FieldRule,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            name: FieldRule::text(&["h1"]),
            image: FieldRule::attr(&["img.wp-post-image"], "src"),
            description: FieldRule::text(&[".entry-content p"]),
            price: FieldRule::text(&["span.precio", "span.price"]),
        }
    }
}

impl ExtractionRules {
    pub fn fields(&self) -> [(&'static str, &FieldRule); 4] {
        [
            ("name", &self.name),
            ("image", &self.image),
            ("description", &self.description),
            ("price", &self.price),
        ]
    }
}
