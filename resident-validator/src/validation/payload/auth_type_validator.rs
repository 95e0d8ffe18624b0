//! Auth type validation for lock/unlock requests

use crate::config::ValidatorConfig;
use crate::types::{fields, RequestContext, ResidentRequest};
use crate::validation::{ValidationError, ValidationResult, Validator};
use std::collections::BTreeSet;

/// Validates the `authType` list against the configured allow-list
///
/// The list must be non-empty and every entry must be allowed; a single
/// unknown entry rejects the whole request.
#[derive(Debug, Clone)]
pub struct AuthTypeValidator {
    allowed: BTreeSet<String>,
}

impl AuthTypeValidator {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &ValidatorConfig) -> Self {
        Self {
            allowed: config.allowed_auth_types(),
        }
    }

    pub fn allowed(&self) -> &BTreeSet<String> {
        &self.allowed
    }

    pub fn check(&self, auth_types: Option<&[String]>) -> ValidationResult {
        match auth_types {
            Some(auth_types)
                if !auth_types.is_empty()
                    && auth_types.iter().all(|auth_type| self.allowed.contains(auth_type)) =>
            {
                Ok(())
            }
            _ => Err(ValidationError::unsupported_value(fields::AUTH_TYPE)),
        }
    }
}

impl<P: ResidentRequest> Validator<P> for AuthTypeValidator {
    type Error = ValidationError;

    fn validate(&self, _context: &RequestContext, payload: &P) -> ValidationResult {
        self.check(payload.auth_types())
    }
}
