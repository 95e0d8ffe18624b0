//! # Resident Validator
//!
//! Input validation for resident service requests: authentication lock and
//! unlock, e-UIN download, authentication history and card reprint.
//! Every request is checked before any downstream work and either accepted
//! or rejected with the first offending field and a short reason.

pub mod config;
pub mod types;
pub mod validation;
pub mod validator;

// Re-export main types for convenience
pub use config::{ConfigError, RequestIds, ValidatorConfig};
pub use types::*;
pub use validation::identity::{IdFormatChecker, IdentityDispatcher, RidChecker, UinChecker, VidChecker};
pub use validation::{RejectionKind, ValidationError, ValidationResult, Validator, Verdict};
pub use validator::RequestValidator;
