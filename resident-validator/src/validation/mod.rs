//! Validation system for resident service requests
//!
//! Each concern (envelope, identity, payload fields) is a separate
//! [`Validator`]; [`rule_chain::RuleChain`] composes them per operation.

pub mod envelope;
pub mod errors;
pub mod identity;
pub mod payload;
pub mod rule_chain;
pub mod traits;

// Re-export main validation types
pub use errors::{RejectionKind, ValidationError, ValidationResult, Verdict, INVALID_INPUT_CODE};
pub use rule_chain::{FieldRule, OperationProfile, RuleChain};
pub use traits::Validator;
