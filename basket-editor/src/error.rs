//! Editor error types

use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use std::fmt;
use thiserror::Error;

use crate::store::StoreError;

/// Rule broken by an editable state during normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationRule {
    TitleRequired,
    PriceRequired,
    InvalidNumericField,
    RatingOutOfRange,
}

impl ViolationRule {
    pub fn code(&self) -> &'static str {
        match self {
            Self::TitleRequired => "title_required",
            Self::PriceRequired => "price_required",
            Self::InvalidNumericField => "invalid_numeric_field",
            Self::RatingOutOfRange => "rating_out_of_range",
        }
    }
}

/// One violated rule, with the offending field when the rule is shared
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: ViolationRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

impl Violation {
    pub fn new(rule: ViolationRule) -> Self {
        Self { rule, field: None }
    }

    pub fn on_field(rule: ViolationRule, field: &'static str) -> Self {
        Self {
            rule,
            field: Some(field),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(f, "{}({})", self.rule.code(), field),
            None => f.write_str(self.rule.code()),
        }
    }
}

/// Every violation found in one normalization pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn contains(&self, rule: ViolationRule) -> bool {
        self.0.iter().any(|v| v.rule == rule)
    }

    /// Ok when nothing was violated
    pub fn into_result(self) -> Result<(), EditorError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(EditorError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&rules.join(", "))
    }
}

/// Editor error type
#[derive(Debug, Clone, Error)]
pub enum EditorError {
    /// One or more fields failed validation
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// List operation addressed an entry that does not exist
    #[error("Index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Removal would leave an option group without options
    #[error("Option group must keep at least one option")]
    MinimumEntries,

    /// Malformed numeric text in a price slot
    #[error("Invalid numeric input for {field}: {input:?}")]
    InvalidNumericInput { field: String, input: String },

    /// Store failure, surfaced unchanged
    #[error("Persistence error: {0}")]
    Persistence(#[from] StoreError),

    /// Submit after the item was already persisted
    #[error("Editor session already persisted")]
    SessionClosed,
}

impl EditorError {
    pub fn invalid_numeric(field: impl Into<String>, input: impl Into<String>) -> Self {
        Self::InvalidNumericInput {
            field: field.into(),
            input: input.into(),
        }
    }

    /// Stable error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::IndexOutOfRange { .. } => ErrorCode::ListIndexOutOfRange,
            Self::MinimumEntries => ErrorCode::OptionGroupMinimumEntries,
            Self::InvalidNumericInput { .. } => ErrorCode::FormatPriceInvalid,
            Self::Persistence(err) => err.code(),
            Self::SessionClosed => ErrorCode::EditorSessionClosed,
        }
    }
}

impl From<EditorError> for AppError {
    fn from(err: EditorError) -> Self {
        let base = AppError::with_message(err.code(), err.to_string());
        match err {
            EditorError::Validation(errors) => base.with_detail(
                "violations",
                serde_json::to_value(&errors).unwrap_or_default(),
            ),
            EditorError::IndexOutOfRange { index, len } => {
                base.with_detail("index", index).with_detail("len", len)
            }
            EditorError::InvalidNumericInput { field, input } => {
                base.with_detail("field", field).with_detail("input", input)
            }
            _ => base,
        }
    }
}

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
