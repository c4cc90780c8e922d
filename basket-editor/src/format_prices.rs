//! Per-format price overrides being edited

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{FormatPrices, PackagingFormat};
use shared::util::parse_decimal;

use crate::error::{EditorError, EditorResult};

/// The four packaging slots, each optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormatPriceTable {
    slots: FormatPrices,
}

impl FormatPriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, format: PackagingFormat) -> Option<Decimal> {
        self.slots.get(format)
    }

    /// Slot as form text ("" when unset)
    pub fn text(&self, format: PackagingFormat) -> String {
        self.get(format).map(|p| p.to_string()).unwrap_or_default()
    }

    /// Set a slot from form text.
    ///
    /// Empty text clears the slot. Text that is not a decimal number is
    /// rejected and the slot keeps its previous value. Negative prices are
    /// stored as 0.
    pub fn set_format(&mut self, format: PackagingFormat, raw: &str) -> EditorResult<()> {
        let raw = raw.trim();
        if raw.is_empty() {
            self.slots.set(format, None);
            return Ok(());
        }

        let price = parse_decimal(raw).ok_or_else(|| {
            tracing::debug!(format = %format, input = raw, "Rejected format price");
            EditorError::invalid_numeric(format.key(), raw)
        })?;
        self.slots.set(format, Some(price.max(Decimal::ZERO)));
        Ok(())
    }

    /// Sparse map with only the set slots
    pub fn to_canonical(&self) -> FormatPrices {
        self.slots.clone()
    }
}

impl From<&FormatPrices> for FormatPriceTable {
    fn from(prices: &FormatPrices) -> Self {
        Self {
            slots: prices.clone(),
        }
    }
}
