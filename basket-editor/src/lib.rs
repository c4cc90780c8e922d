//! Basket editor core
//!
//! Turns the operator's form state for a catalog basket into the canonical
//! stored document and back, and drives one create-or-update per submit.
//!
//! - [`ListEditor`]: positional editing of nested lists
//! - [`OptionGroupModel`]: one customization group and its options
//! - [`FormatPriceTable`]: per-packaging price overrides
//! - [`normalize`] / [`hydrate`]: editable state ⇄ canonical document
//! - [`EditorSession`]: validation, submit and error state
//! - [`CatalogStore`]: the document store the session writes to

pub mod config;
pub mod editable;
pub mod error;
pub mod format_prices;
pub mod list_editor;
pub mod logger;
pub mod normalizer;
pub mod option_group;
pub mod session;
pub mod store;

pub use config::EditorConfig;
pub use editable::{EditableItem, ItemOrigin, NutritionField, NutritionText};
pub use error::{EditorError, EditorResult, ValidationErrors, Violation, ViolationRule};
pub use format_prices::FormatPriceTable;
pub use list_editor::ListEditor;
pub use normalizer::{hydrate, hydrate_as, normalize};
pub use option_group::OptionGroupModel;
pub use session::{EditorSession, SessionMode, SessionState};
pub use store::{CatalogStore, MemoryStore, StoreError, StoreResult};

// Re-export shared models for convenience
pub use shared::models::{CatalogCategory, CatalogItem, PackagingFormat};
