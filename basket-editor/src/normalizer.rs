//! Editable state ⇄ canonical document
//!
//! [`normalize`] validates the form, coerces text to numbers, strips every
//! empty optional part and returns the document to persist. [`hydrate`] is
//! its inverse. Validation collects every violation in one pass.

use rust_decimal::Decimal;
use shared::models::{CatalogItem, NutritionalInfo, OptionGroup};
use shared::util::parse_decimal;

use crate::editable::{EditableItem, ItemOrigin, NutritionText};
use crate::error::{EditorResult, ValidationErrors, Violation, ViolationRule};
use crate::format_prices::FormatPriceTable;
use crate::list_editor::ListEditor;
use crate::option_group::OptionGroupModel;

/// Highest rating an item can show
pub const MAX_RATING: u8 = 5;

/// Build the canonical document from the editable state.
///
/// Fails with every violated rule at once; nothing is produced unless all
/// fields pass.
pub fn normalize(state: &EditableItem) -> EditorResult<CatalogItem> {
    let mut errors = ValidationErrors::default();

    if state.title.trim().is_empty() {
        errors.push(Violation::new(ViolationRule::TitleRequired));
    }
    let price = parse_price(&state.price);
    if price.is_none() {
        errors.push(Violation::new(ViolationRule::PriceRequired));
    }

    let personalization_fee = optional_decimal(&state.personalization_fee, "personalizationFee", &mut errors);
    let rating = optional_rating(&state.rating, &mut errors);
    let review_count = optional_count(&state.review_count, "reviewCount", &mut errors);

    errors.into_result()?;
    let price = price.unwrap_or_default();

    let (id, created_at) = match &state.origin {
        ItemOrigin::New { .. } => (None, None),
        ItemOrigin::Existing { id, created_at } => (Some(id.clone()), created_at.clone()),
    };

    Ok(CatalogItem {
        id,
        title: state.title.clone(),
        price,
        description: state.description.clone(),
        images: trimmed_entries(&state.images),
        category: state.category,
        is_bestseller: state.is_bestseller,
        included_items: trimmed_entries(&state.included_items),
        customization_groups: committed_groups(&state.customization_groups),
        format_prices: state.format_prices.to_canonical(),
        personalization_fee,
        video_url: non_empty(&state.video_url),
        rating,
        review_count,
        nutritional_info: nutritional_info(&state.nutrition),
        created_at,
    })
}

/// Editable state for a previously normalized document.
///
/// A document carrying its identity opens in edit mode and keeps that
/// identity and `createdAt`; one without opens as a new item. Documents
/// read from the store by key go through [`hydrate_as`] instead.
pub fn hydrate(item: &CatalogItem) -> EditableItem {
    let origin = match &item.id {
        Some(id) => ItemOrigin::Existing {
            id: id.clone(),
            created_at: item.created_at.clone(),
        },
        None => ItemOrigin::New {
            provisional_created_at: shared::util::now_rfc3339(),
        },
    };
    hydrate_as(item, origin)
}

/// Editable state for `item` with the origin decided by the caller.
///
/// The identity inside the document body is ignored; `origin` alone
/// decides whether submit creates or updates.
pub fn hydrate_as(item: &CatalogItem, origin: ItemOrigin) -> EditableItem {
    let nutrition = item
        .nutritional_info
        .as_ref()
        .map(|info| NutritionText {
            calories: info.calories.clone().unwrap_or_default(),
            certification: info.certification.clone().unwrap_or_default(),
            origin: info.origin.clone().unwrap_or_default(),
        })
        .unwrap_or_default();

    tracing::debug!(id = ?item.id, title = %item.title, "Hydrating catalog item");

    EditableItem {
        origin,
        title: item.title.clone(),
        price: item.price.to_string(),
        description: item.description.clone(),
        images: ListEditor::from(item.images.clone()),
        category: item.category,
        is_bestseller: item.is_bestseller,
        included_items: ListEditor::from(item.included_items.clone()),
        customization_groups: item
            .customization_groups
            .iter()
            .map(OptionGroupModel::from)
            .collect(),
        format_prices: FormatPriceTable::from(&item.format_prices),
        personalization_fee: text_or_empty(item.personalization_fee),
        video_url: item.video_url.clone().unwrap_or_default(),
        rating: text_or_empty(item.rating),
        review_count: text_or_empty(item.review_count),
        nutrition,
    }
}

/// Base price: required, decimal, not negative
fn parse_price(raw: &str) -> Option<Decimal> {
    parse_decimal(raw.trim())
        .filter(|price| !price.is_sign_negative() || price.is_zero())
}

fn optional_decimal(raw: &str, field: &'static str, errors: &mut ValidationErrors) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match parse_decimal(raw) {
        Some(value) => Some(value.max(Decimal::ZERO)),
        None => {
            errors.push(Violation::on_field(ViolationRule::InvalidNumericField, field));
            None
        }
    }
}

fn optional_rating(raw: &str, errors: &mut ValidationErrors) -> Option<u8> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<i64>() {
        Ok(value) if (0..=i64::from(MAX_RATING)).contains(&value) => u8::try_from(value).ok(),
        Ok(_) => {
            errors.push(Violation::on_field(ViolationRule::RatingOutOfRange, "rating"));
            None
        }
        Err(_) => {
            errors.push(Violation::on_field(ViolationRule::InvalidNumericField, "rating"));
            None
        }
    }
}

fn optional_count(raw: &str, field: &'static str, errors: &mut ValidationErrors) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<u32>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(Violation::on_field(ViolationRule::InvalidNumericField, field));
            None
        }
    }
}

/// Trimmed entries, blanks dropped, order kept
fn trimmed_entries(list: &ListEditor<String>) -> Vec<String> {
    list.iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn committed_groups(groups: &ListEditor<OptionGroupModel>) -> Vec<OptionGroup> {
    groups
        .iter()
        .filter(|group| !group.is_draft())
        .map(OptionGroupModel::to_canonical)
        .collect()
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn nutritional_info(text: &NutritionText) -> Option<NutritionalInfo> {
    let info = NutritionalInfo {
        calories: non_empty(&text.calories),
        certification: non_empty(&text.certification),
        origin: non_empty(&text.origin),
    };
    (!info.is_empty()).then_some(info)
}

fn text_or_empty<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
