// Modular tools
pub mod clean;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod sitemap;
