//! Core validation traits and interfaces

use crate::types::RequestContext;

/// Core validation trait that all validators implement
pub trait Validator<Target: ?Sized> {
    type Error;

    fn validate(&self, context: &RequestContext, target: &Target) -> Result<(), Self::Error>;
}
