//! Where the menu comes from.

pub mod fallback;
pub mod source;
pub mod strategy;

pub use fallback::StaticFallbackCatalog;
pub use source::CatalogSource;
pub use strategy::{CatalogStrategy, SelectingCatalog};
