use super::types::{FieldRule, ValueSource};
use crate::error::Result;
use crate::selectors::compile_chain;
use scraper::{ElementRef, Html, Selector};

/// A field rule with its selectors parsed.
#[derive(Debug)]
pub(super) struct CompiledRule {
    selectors: Vec<Selector>,
    source: ValueSource,
}

impl CompiledRule {
    pub(super) fn compile(rule: &FieldRule) -> Result<Self> {
        Ok(Self {
            selectors: compile_chain(&rule.selectors)?,
            source: rule.source.clone(),
        })
    }

    /// First element, in document order, of the first selector that matches.
    fn first_match<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>> {
        self.selectors
            .iter()
            .find_map(|sel| doc.select(sel).next())
    }

    /// `None` when nothing matched or the attribute is absent.
    pub(super) fn value(&self, doc: &Html) -> Option<String> {
        let el = self.first_match(doc)?;
        match &self.source {
            ValueSource::Text => Some(element_text(&el)),
            ValueSource::Attr(name) => el.value().attr(name).map(|v| v.to_string()),
        }
    }
}

fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>()
}
