//! Shared types for the basket console
//!
//! The canonical catalog document, its enumerations, the message card
//! price table, and the unified error system.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{CatalogCategory, CatalogItem, FormatPrices, NutritionalInfo, OptionGroup, PackagingFormat};
