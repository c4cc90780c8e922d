//! Packaging format prices

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical packaging a basket can be ordered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PackagingFormat {
    #[serde(rename = "cesta")]
    Basket,
    #[serde(rename = "bandeja")]
    Tray,
    #[serde(rename = "maleta")]
    Case,
    #[serde(rename = "caixamimo")]
    GiftBox,
}

impl PackagingFormat {
    pub const ALL: [PackagingFormat; 4] = [
        PackagingFormat::Basket,
        PackagingFormat::Tray,
        PackagingFormat::Case,
        PackagingFormat::GiftBox,
    ];

    /// Key used in the stored `formatOptions` map
    pub fn key(&self) -> &'static str {
        match self {
            Self::Basket => "cesta",
            Self::Tray => "bandeja",
            Self::Case => "maleta",
            Self::GiftBox => "caixamimo",
        }
    }
}

impl fmt::Display for PackagingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Sparse per-format price overrides (stored as `formatOptions`)
///
/// Only formats with an entered value are written; the map itself is
/// always present on a canonical document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatPrices {
    #[serde(
        rename = "cesta",
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub basket: Option<Decimal>,
    #[serde(
        rename = "bandeja",
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub tray: Option<Decimal>,
    #[serde(
        rename = "maleta",
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub case: Option<Decimal>,
    #[serde(
        rename = "caixamimo",
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub gift_box: Option<Decimal>,
}

impl FormatPrices {
    pub fn get(&self, format: PackagingFormat) -> Option<Decimal> {
        match format {
            PackagingFormat::Basket => self.basket,
            PackagingFormat::Tray => self.tray,
            PackagingFormat::Case => self.case,
            PackagingFormat::GiftBox => self.gift_box,
        }
    }

    pub fn set(&mut self, format: PackagingFormat, price: Option<Decimal>) {
        let slot = match format {
            PackagingFormat::Basket => &mut self.basket,
            PackagingFormat::Tray => &mut self.tray,
            PackagingFormat::Case => &mut self.case,
            PackagingFormat::GiftBox => &mut self.gift_box,
        };
        *slot = price;
    }

    /// Formats that carry a price, in `PackagingFormat::ALL` order
    pub fn entries(&self) -> impl Iterator<Item = (PackagingFormat, Decimal)> + '_ {
        PackagingFormat::ALL
            .into_iter()
            .filter_map(|format| self.get(format).map(|price| (format, price)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_empty_map_serializes_as_empty_object() {
        let json = serde_json::to_value(FormatPrices::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_sparse_serialization() {
        let mut prices = FormatPrices::default();
        prices.set(PackagingFormat::Tray, Some(Decimal::from_str("12.5").unwrap()));

        let json = serde_json::to_value(&prices).unwrap();
        assert_eq!(json, serde_json::json!({ "bandeja": 12.5 }));

        let parsed: FormatPrices = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, prices);
        assert_eq!(
            parsed.entries().collect::<Vec<_>>(),
            vec![(PackagingFormat::Tray, Decimal::from_str("12.5").unwrap())]
        );
    }

    #[test]
    fn test_format_keys() {
        let keys: Vec<_> = PackagingFormat::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys, vec!["cesta", "bandeja", "maleta", "caixamimo"]);
        assert_eq!(PackagingFormat::GiftBox.to_string(), "caixamimo");
    }
}
