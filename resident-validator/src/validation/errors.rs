//! Validation error types

use serde::{Deserialize, Serialize};

/// Error code the resident service attaches to every input rejection
pub const INVALID_INPUT_CODE: &str = "RES-SER-410";

/// Coarse classification of a rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionKind {
    MissingField,
    FieldMismatch,
    InvalidFormat,
    UnrecognizedEnum,
    IdentityFormatInvalid,
    PaginationPairingError,
}

/// Reasons a request envelope is rejected.
///
/// Every variant names the offending wire field. Display follows the
/// resident service message convention `Invalid Input Parameter- <field>: <reason>`.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Required value is absent
    #[error("Invalid Input Parameter- {field}: missing")]
    Missing { field: &'static str },

    /// Value is absent or only whitespace
    #[error("Invalid Input Parameter- {field}: empty")]
    Empty { field: &'static str },

    /// Value differs from the configured expectation
    #[error("Invalid Input Parameter- {field}: mismatch")]
    Mismatch { field: &'static str },

    /// Timestamp cannot be parsed
    #[error("Invalid Input Parameter- {field}: invalid format")]
    InvalidFormat { field: &'static str },

    /// Timestamp parsed but lies outside the configured clock-skew window
    #[error("Invalid Input Parameter- {field}: outside allowed window")]
    OutsideWindow { field: &'static str },

    /// Page value is not a base-10 integer
    #[error("Invalid Input Parameter- {field}: not numeric")]
    NotNumeric { field: &'static str },

    /// Page value is zero or negative
    #[error("Invalid Input Parameter- {field}: must be positive")]
    NotPositive { field: &'static str },

    /// Identifier type is not UIN, VID or RID
    #[error("Invalid Input Parameter- {field}: invalid type")]
    InvalidType { field: &'static str },

    /// Collection contains a value outside the configured set
    #[error("Invalid Input Parameter- {field}: unsupported value")]
    UnsupportedValue { field: &'static str },

    /// Identifier checker rejected the value
    #[error("Invalid Input Parameter- {field}: format invalid")]
    IdentityFormat { field: &'static str },

    /// Only one half of a paired field was supplied
    #[error("Invalid Input Parameter- {field}: must be provided together")]
    Unpaired { field: &'static str },
}

impl ValidationError {
    pub fn missing(field: &'static str) -> Self {
        Self::Missing { field }
    }

    pub fn empty(field: &'static str) -> Self {
        Self::Empty { field }
    }

    pub fn mismatch(field: &'static str) -> Self {
        Self::Mismatch { field }
    }

    pub fn invalid_format(field: &'static str) -> Self {
        Self::InvalidFormat { field }
    }

    pub fn outside_window(field: &'static str) -> Self {
        Self::OutsideWindow { field }
    }

    pub fn not_numeric(field: &'static str) -> Self {
        Self::NotNumeric { field }
    }

    pub fn not_positive(field: &'static str) -> Self {
        Self::NotPositive { field }
    }

    pub fn invalid_type(field: &'static str) -> Self {
        Self::InvalidType { field }
    }

    pub fn unsupported_value(field: &'static str) -> Self {
        Self::UnsupportedValue { field }
    }

    pub fn identity_format(field: &'static str) -> Self {
        Self::IdentityFormat { field }
    }

    pub fn unpaired(field: &'static str) -> Self {
        Self::Unpaired { field }
    }

    /// Wire name of the rejected field
    pub fn field(&self) -> &'static str {
        match *self {
            Self::Missing { field }
            | Self::Empty { field }
            | Self::Mismatch { field }
            | Self::InvalidFormat { field }
            | Self::OutsideWindow { field }
            | Self::NotNumeric { field }
            | Self::NotPositive { field }
            | Self::InvalidType { field }
            | Self::UnsupportedValue { field }
            | Self::IdentityFormat { field }
            | Self::Unpaired { field } => field,
        }
    }

    /// Short human-readable reason
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "missing",
            Self::Empty { .. } => "empty",
            Self::Mismatch { .. } => "mismatch",
            Self::InvalidFormat { .. } => "invalid format",
            Self::OutsideWindow { .. } => "outside allowed window",
            Self::NotNumeric { .. } => "not numeric",
            Self::NotPositive { .. } => "must be positive",
            Self::InvalidType { .. } => "invalid type",
            Self::UnsupportedValue { .. } => "unsupported value",
            Self::IdentityFormat { .. } => "format invalid",
            Self::Unpaired { .. } => "must be provided together",
        }
    }

    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::Missing { .. } | Self::Empty { .. } => RejectionKind::MissingField,
            Self::Mismatch { .. } => RejectionKind::FieldMismatch,
            Self::InvalidFormat { .. }
            | Self::OutsideWindow { .. }
            | Self::NotNumeric { .. }
            | Self::NotPositive { .. } => RejectionKind::InvalidFormat,
            Self::InvalidType { .. } | Self::UnsupportedValue { .. } => {
                RejectionKind::UnrecognizedEnum
            }
            Self::IdentityFormat { .. } => RejectionKind::IdentityFormatInvalid,
            Self::Unpaired { .. } => RejectionKind::PaginationPairingError,
        }
    }

    pub fn error_code(&self) -> &'static str {
        INVALID_INPUT_CODE
    }
}

/// Result type for validation operations
pub type ValidationResult<T = ()> = Result<T, ValidationError>;

/// Serializable outcome of a validation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Verdict {
    Accepted,
    Rejected {
        field: String,
        reason: String,
        code: String,
    },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl From<&ValidationError> for Verdict {
    fn from(error: &ValidationError) -> Self {
        Verdict::Rejected {
            field: error.field().to_string(),
            reason: error.reason().to_string(),
            code: error.error_code().to_string(),
        }
    }
}

impl<T> From<&ValidationResult<T>> for Verdict {
    fn from(result: &ValidationResult<T>) -> Self {
        match result {
            Ok(_) => Verdict::Accepted,
            Err(error) => Verdict::from(error),
        }
    }
}

impl<T> From<ValidationResult<T>> for Verdict {
    fn from(result: ValidationResult<T>) -> Self {
        Verdict::from(&result)
    }
}
