//! Data models
//!
//! Shared between the editor core and any document-store adapter.
//! Stored field names follow the legacy document schema.

pub mod catalog_item;
pub mod category;
pub mod format_price;
pub mod message_card;

// Re-exports
pub use catalog_item::*;
pub use category::*;
pub use format_price::*;
pub use message_card::*;
