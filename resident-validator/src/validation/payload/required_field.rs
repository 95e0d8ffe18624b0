//! Non-blank checks for plain payload strings

use crate::types::{fields, RequestContext, ResidentRequest};
use crate::validation::{ValidationError, ValidationResult, Validator};

/// Payload strings that must be present and not blank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    TransactionId,
    Otp,
}

impl RequiredField {
    pub fn name(&self) -> &'static str {
        match self {
            RequiredField::TransactionId => fields::TRANSACTION_ID,
            RequiredField::Otp => fields::OTP,
        }
    }

    fn value<'a, P: ResidentRequest>(&self, payload: &'a P) -> Option<&'a str> {
        match self {
            RequiredField::TransactionId => payload.transaction_id(),
            RequiredField::Otp => payload.otp(),
        }
    }
}

impl<P: ResidentRequest> Validator<P> for RequiredField {
    type Error = ValidationError;

    fn validate(&self, _context: &RequestContext, payload: &P) -> ValidationResult {
        require_non_blank(self.name(), self.value(payload))
    }
}

/// Reject `None` and whitespace-only values
pub fn require_non_blank(field: &'static str, value: Option<&str>) -> ValidationResult {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::empty(field)),
    }
}
