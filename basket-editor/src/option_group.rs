//! Customization group being edited

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::OptionGroup;
use shared::util::parse_decimal;

use crate::error::{EditorError, EditorResult};
use crate::list_editor::ListEditor;

/// One customization category in the form, with its option labels
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroupModel {
    category: String,
    options: ListEditor<String>,
    price_per_item: Decimal,
}

impl Default for OptionGroupModel {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionGroupModel {
    /// Fresh draft row: no category, one blank option, price 0
    pub fn new() -> Self {
        Self {
            category: String::new(),
            options: ListEditor::from(vec![String::new()]),
            price_per_item: Decimal::ZERO,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn options(&self) -> &ListEditor<String> {
        &self.options
    }

    pub fn price_per_item(&self) -> Decimal {
        self.price_per_item
    }

    pub fn set_category(&mut self, text: impl Into<String>) {
        self.category = text.into();
    }

    /// Negative amounts are stored as 0
    pub fn set_price_per_item(&mut self, amount: Decimal) {
        self.price_per_item = amount.max(Decimal::ZERO);
    }

    /// Set the price from form text; blank means 0
    pub fn set_price_per_item_text(&mut self, raw: &str) -> EditorResult<()> {
        let raw = raw.trim();
        if raw.is_empty() {
            self.price_per_item = Decimal::ZERO;
            return Ok(());
        }
        let amount =
            parse_decimal(raw).ok_or_else(|| EditorError::invalid_numeric("pricePerItem", raw))?;
        self.set_price_per_item(amount);
        Ok(())
    }

    pub fn add_option(&mut self) {
        self.options.append(String::new());
    }

    pub fn set_option(&mut self, index: usize, label: impl Into<String>) -> EditorResult<()> {
        self.options.update_at(index, label.into())
    }

    /// Remove an option; the last remaining option cannot be removed
    pub fn remove_option(&mut self, index: usize) -> EditorResult<()> {
        if index < self.options.len() && self.options.len() <= 1 {
            return Err(EditorError::MinimumEntries);
        }
        self.options.remove_at(index)?;
        Ok(())
    }

    /// Rows without a category are dropped on normalize
    pub fn is_draft(&self) -> bool {
        self.category.trim().is_empty()
    }

    /// Stored form of this group; options are kept verbatim
    pub fn to_canonical(&self) -> OptionGroup {
        OptionGroup {
            category: self.category.clone(),
            options: self.options.as_slice().to_vec(),
            price_per_item: self.price_per_item,
        }
    }
}

impl From<&OptionGroup> for OptionGroupModel {
    fn from(group: &OptionGroup) -> Self {
        Self {
            category: group.category.clone(),
            options: ListEditor::from(group.options.clone()),
            price_per_item: group.price_per_item,
        }
    }
}
