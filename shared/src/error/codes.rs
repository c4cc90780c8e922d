//! Unified error codes for the basket console
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the console frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,

    // ==================== 6xxx: Catalog ====================
    /// Catalog item not found
    CatalogItemNotFound = 6001,
    /// Catalog item could not be saved
    CatalogItemSaveFailed = 6002,
    /// Editor session already persisted
    EditorSessionClosed = 6003,
    /// List index outside the current bounds
    ListIndexOutOfRange = 6101,
    /// Option group must keep at least one option
    OptionGroupMinimumEntries = 6102,
    /// Format price text is not a decimal number
    FormatPriceInvalid = 6201,

    // ==================== 9xxx: System ====================
    /// Network error
    NetworkError = 9003,
    /// Operation timed out
    TimeoutError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this code represents success
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",

            // Catalog
            ErrorCode::CatalogItemNotFound => "Catalog item not found",
            ErrorCode::CatalogItemSaveFailed => "Catalog item could not be saved",
            ErrorCode::EditorSessionClosed => "Editor session already persisted",
            ErrorCode::ListIndexOutOfRange => "List index out of range",
            ErrorCode::OptionGroupMinimumEntries => "Option group must keep at least one option",
            ErrorCode::FormatPriceInvalid => "Format price is not a valid decimal",

            // System
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error returned when converting an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),

            // Catalog
            6001 => Ok(ErrorCode::CatalogItemNotFound),
            6002 => Ok(ErrorCode::CatalogItemSaveFailed),
            6003 => Ok(ErrorCode::EditorSessionClosed),
            6101 => Ok(ErrorCode::ListIndexOutOfRange),
            6102 => Ok(ErrorCode::OptionGroupMinimumEntries),
            6201 => Ok(ErrorCode::FormatPriceInvalid),

            // System
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::CatalogItemNotFound.code(), 6001);
        assert_eq!(ErrorCode::ListIndexOutOfRange.code(), 6101);
        assert_eq!(ErrorCode::FormatPriceInvalid.code(), 6201);
        assert_eq!(ErrorCode::TimeoutError.code(), 9004);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(6002), Ok(ErrorCode::CatalogItemSaveFailed));
        assert_eq!(ErrorCode::try_from(6102), Ok(ErrorCode::OptionGroupMinimumEntries));
        assert_eq!(ErrorCode::try_from(9003), Ok(ErrorCode::NetworkError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(3), Err(InvalidErrorCode(3)));
        assert_eq!(ErrorCode::try_from(9001), Err(InvalidErrorCode(9001)));
        assert_eq!(ErrorCode::try_from(6999), Err(InvalidErrorCode(6999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::CatalogItemNotFound).unwrap();
        assert_eq!(json, "6001");

        let code: ErrorCode = serde_json::from_str("2").unwrap();
        assert_eq!(code, ErrorCode::ValidationFailed);

        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_and_message() {
        assert_eq!(format!("{}", ErrorCode::FormatPriceInvalid), "6201");
        assert_eq!(ErrorCode::TimeoutError.message(), "Operation timed out");
        assert_eq!(format!("{}", InvalidErrorCode(42)), "invalid error code: 42");
    }
}
