//! Unified error codes
//!
//! Codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Store catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 on the wire so the dashboard can branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request (unparseable body or query)
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,
    /// HTTP method not supported on this route
    MethodNotAllowed = 10,

    // ==================== 6xxx: Store ====================
    /// Store not found
    StoreNotFound = 6001,
    /// Category outside the closed category set
    InvalidCategory = 6002,
    /// Location outside the closed floor/wing set
    InvalidLocation = 6003,
    /// Status outside active/inactive/maintenance
    InvalidStatus = 6004,
    /// Store identifier already taken
    StoreIdExists = 6005,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Success",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field missing",
            ErrorCode::ValueOutOfRange => "Value out of range",
            ErrorCode::MethodNotAllowed => "Invalid method",

            // Store
            ErrorCode::StoreNotFound => "Store not found",
            ErrorCode::InvalidCategory => "Invalid store category",
            ErrorCode::InvalidLocation => "Invalid store location",
            ErrorCode::InvalidStatus => "Invalid store status",
            ErrorCode::StoreIdExists => "Store ID already exists",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
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
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),
            10 => Ok(ErrorCode::MethodNotAllowed),

            // Store
            6001 => Ok(ErrorCode::StoreNotFound),
            6002 => Ok(ErrorCode::InvalidCategory),
            6003 => Ok(ErrorCode::InvalidLocation),
            6004 => Ok(ErrorCode::InvalidStatus),
            6005 => Ok(ErrorCode::StoreIdExists),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_through_u16() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::StoreNotFound,
            ErrorCode::InvalidLocation,
            ErrorCode::DatabaseError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_unknown_u16_rejected() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_only_constructed_codes_decode() {
        for value in [1, 4, 6, 9001, 9005] {
            assert!(ErrorCode::try_from(value).is_err(), "{value}");
        }
        assert_eq!(ErrorCode::try_from(6005), Ok(ErrorCode::StoreIdExists));
    }

    #[test]
    fn test_display_is_padded() {
        assert_eq!(ErrorCode::NotFound.to_string(), "E0003");
        assert_eq!(ErrorCode::StoreNotFound.to_string(), "E6001");
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::InvalidCategory).unwrap();
        assert_eq!(json, "6002");
        let back: ErrorCode = serde_json::from_str("6002").unwrap();
        assert_eq!(back, ErrorCode::InvalidCategory);
    }
}
