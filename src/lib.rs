#![doc = include_str!("../README.md")]

pub mod api;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod selectors;
pub mod tools;
pub mod types;

mod tests;

pub use config::ExportConfig;
pub use engine::*;
pub use error::{CatalogError, Result};
pub use types::*;
