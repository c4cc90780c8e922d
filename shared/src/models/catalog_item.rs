//! Catalog Item Model
//!
//! The canonical persisted basket document. Optional parts are `Option`s
//! that are skipped when absent, so a stored document never carries empty
//! placeholders.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::CatalogCategory;
use super::format_price::FormatPrices;

/// Collection the console stores baskets in
pub const CATALOG_COLLECTION: &str = "cestas";

/// Catalog item entity (stored basket document)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Store-assigned identity, absent until first persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    /// Image URLs in display order
    #[serde(rename = "image", default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: CatalogCategory,
    #[serde(rename = "bestseller", default)]
    pub is_bestseller: bool,
    #[serde(rename = "items", default)]
    pub included_items: Vec<String>,
    #[serde(rename = "customizationOptions", default)]
    pub customization_groups: Vec<OptionGroup>,
    #[serde(rename = "formatOptions", default)]
    pub format_prices: FormatPrices,
    #[serde(
        rename = "mediaPersonalizationFee",
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub personalization_fee: Option<Decimal>,
    #[serde(rename = "video", default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// 0..=5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritional_info: Option<NutritionalInfo>,
    /// RFC 3339 creation time, stamped by the store on first create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl CatalogItem {
    /// Minimal document with every optional part absent
    pub fn new(title: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: None,
            title: title.into(),
            price,
            description: String::new(),
            images: Vec::new(),
            category: CatalogCategory::default(),
            is_bestseller: false,
            included_items: Vec::new(),
            customization_groups: Vec::new(),
            format_prices: FormatPrices::default(),
            personalization_fee: None,
            video_url: None,
            rating: None,
            review_count: None,
            nutritional_info: None,
            created_at: None,
        }
    }
}

/// Customization category embedded in a catalog item (e.g. "Vinhos")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroup {
    pub category: String,
    #[serde(default)]
    pub options: Vec<String>,
    /// Price charged per selected option
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price_per_item: Decimal,
}

/// Nutritional facts; only entered fields are stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl NutritionalInfo {
    pub fn is_empty(&self) -> bool {
        self.calories.is_none() && self.certification.is_none() && self.origin.is_none()
    }
}
