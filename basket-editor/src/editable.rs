//! Editable state of one catalog item
//!
//! Every field is always populated (empty text, empty list) so the form has
//! a stable value to bind to. Numeric fields are kept as the text the
//! operator typed; parsing happens in the normalizer.

use serde::Serialize;
use shared::models::CatalogCategory;

use crate::error::EditorResult;
use crate::format_prices::FormatPriceTable;
use crate::list_editor::ListEditor;
use crate::option_group::OptionGroupModel;

/// Where the state came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ItemOrigin {
    /// Not stored yet. The timestamp is for display only; the store stamps
    /// the real one.
    #[serde(rename_all = "camelCase")]
    New { provisional_created_at: String },
    /// Hydrated from a stored document
    #[serde(rename_all = "camelCase")]
    Existing {
        id: String,
        created_at: Option<String>,
    },
}

/// Nutritional fact fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutritionField {
    Calories,
    Certification,
    Origin,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NutritionText {
    pub calories: String,
    pub certification: String,
    pub origin: String,
}

impl NutritionText {
    fn slot_mut(&mut self, field: NutritionField) -> &mut String {
        match field {
            NutritionField::Calories => &mut self.calories,
            NutritionField::Certification => &mut self.certification,
            NutritionField::Origin => &mut self.origin,
        }
    }
}

/// Form state for one catalog item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableItem {
    pub(crate) origin: ItemOrigin,
    pub(crate) title: String,
    pub(crate) price: String,
    pub(crate) description: String,
    pub(crate) images: ListEditor<String>,
    pub(crate) category: CatalogCategory,
    pub(crate) is_bestseller: bool,
    pub(crate) included_items: ListEditor<String>,
    pub(crate) customization_groups: ListEditor<OptionGroupModel>,
    pub(crate) format_prices: FormatPriceTable,
    pub(crate) personalization_fee: String,
    pub(crate) video_url: String,
    pub(crate) rating: String,
    pub(crate) review_count: String,
    pub(crate) nutrition: NutritionText,
}

impl Default for EditableItem {
    fn default() -> Self {
        Self::new()
    }
}

impl EditableItem {
    /// Blank form for a new item
    pub fn new() -> Self {
        Self::with_origin(ItemOrigin::New {
            provisional_created_at: shared::util::now_rfc3339(),
        })
    }

    pub(crate) fn with_origin(origin: ItemOrigin) -> Self {
        Self {
            origin,
            title: String::new(),
            price: String::new(),
            description: String::new(),
            images: ListEditor::new(),
            category: CatalogCategory::default(),
            is_bestseller: false,
            included_items: ListEditor::new(),
            customization_groups: ListEditor::new(),
            format_prices: FormatPriceTable::new(),
            personalization_fee: String::new(),
            video_url: String::new(),
            rating: String::new(),
            review_count: String::new(),
            nutrition: NutritionText::default(),
        }
    }

    // ========== Read access ==========

    pub fn origin(&self) -> &ItemOrigin {
        &self.origin
    }

    pub fn is_new(&self) -> bool {
        matches!(self.origin, ItemOrigin::New { .. })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn images(&self) -> &ListEditor<String> {
        &self.images
    }

    pub fn category(&self) -> CatalogCategory {
        self.category
    }

    pub fn is_bestseller(&self) -> bool {
        self.is_bestseller
    }

    pub fn included_items(&self) -> &ListEditor<String> {
        &self.included_items
    }

    pub fn customization_groups(&self) -> &ListEditor<OptionGroupModel> {
        &self.customization_groups
    }

    pub fn format_prices(&self) -> &FormatPriceTable {
        &self.format_prices
    }

    pub fn personalization_fee(&self) -> &str {
        &self.personalization_fee
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    pub fn rating(&self) -> &str {
        &self.rating
    }

    pub fn review_count(&self) -> &str {
        &self.review_count
    }

    pub fn nutrition(&self) -> &NutritionText {
        &self.nutrition
    }

    // ========== Scalar setters ==========

    pub fn set_title(&mut self, text: impl Into<String>) {
        self.title = text.into();
    }

    pub fn set_price(&mut self, text: impl Into<String>) {
        self.price = text.into();
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    pub fn set_category(&mut self, category: CatalogCategory) {
        self.category = category;
    }

    pub fn set_bestseller(&mut self, flag: bool) {
        self.is_bestseller = flag;
    }

    pub fn set_personalization_fee(&mut self, text: impl Into<String>) {
        self.personalization_fee = text.into();
    }

    pub fn set_video_url(&mut self, text: impl Into<String>) {
        self.video_url = text.into();
    }

    pub fn set_rating(&mut self, text: impl Into<String>) {
        self.rating = text.into();
    }

    pub fn set_review_count(&mut self, text: impl Into<String>) {
        self.review_count = text.into();
    }

    pub fn set_nutrition(&mut self, field: NutritionField, text: impl Into<String>) {
        *self.nutrition.slot_mut(field) = text.into();
    }

    // ========== Nested collections ==========

    pub fn images_mut(&mut self) -> &mut ListEditor<String> {
        &mut self.images
    }

    pub fn included_items_mut(&mut self) -> &mut ListEditor<String> {
        &mut self.included_items
    }

    pub fn customization_groups_mut(&mut self) -> &mut ListEditor<OptionGroupModel> {
        &mut self.customization_groups
    }

    pub fn format_prices_mut(&mut self) -> &mut FormatPriceTable {
        &mut self.format_prices
    }

    /// Append a draft group and return its index
    pub fn add_group(&mut self) -> usize {
        self.customization_groups.append(OptionGroupModel::new());
        self.customization_groups.len() - 1
    }

    pub fn group_mut(&mut self, index: usize) -> EditorResult<&mut OptionGroupModel> {
        self.customization_groups.get_mut(index)
    }
}
