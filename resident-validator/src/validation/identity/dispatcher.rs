//! Routes identity validation to the checker for the declared id type

use super::checkers::{IdFormatChecker, RidChecker, UinChecker, VidChecker};
use crate::types::{fields, IdType, RequestContext, ResidentRequest};
use crate::validation::{ValidationError, ValidationResult, Validator};
use std::fmt;
use std::sync::Arc;

/// Validates `individualIdType` and `individualId` together
///
/// The type must be exactly `UIN`, `VID` or `RID`; the id must be non-blank
/// and accepted by the checker registered for that type.
#[derive(Clone)]
pub struct IdentityDispatcher {
    uin: Arc<dyn IdFormatChecker>,
    vid: Arc<dyn IdFormatChecker>,
    rid: Arc<dyn IdFormatChecker>,
}

impl IdentityDispatcher {
    pub fn new(
        uin: Arc<dyn IdFormatChecker>,
        vid: Arc<dyn IdFormatChecker>,
        rid: Arc<dyn IdFormatChecker>,
    ) -> Self {
        Self { uin, vid, rid }
    }

    /// Dispatcher backed by the bundled UIN/VID/RID checkers
    pub fn with_reference_checkers() -> Self {
        Self::new(
            Arc::new(UinChecker::new()),
            Arc::new(VidChecker::new()),
            Arc::new(RidChecker::new()),
        )
    }

    pub fn checker_for(&self, id_type: IdType) -> &dyn IdFormatChecker {
        match id_type {
            IdType::Uin => self.uin.as_ref(),
            IdType::Vid => self.vid.as_ref(),
            IdType::Rid => self.rid.as_ref(),
        }
    }

    pub fn check(&self, individual_id: Option<&str>, id_type: Option<&str>) -> ValidationResult {
        let id_type: IdType = id_type
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(|| ValidationError::invalid_type(fields::INDIVIDUAL_ID_TYPE))?;

        let individual_id = individual_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ValidationError::empty(fields::INDIVIDUAL_ID))?;

        if !self.checker_for(id_type).is_valid(individual_id) {
            return Err(ValidationError::identity_format(fields::INDIVIDUAL_ID));
        }

        Ok(())
    }
}

impl fmt::Debug for IdentityDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityDispatcher").finish_non_exhaustive()
    }
}

impl<P: ResidentRequest> Validator<P> for IdentityDispatcher {
    type Error = ValidationError;

    fn validate(&self, _context: &RequestContext, payload: &P) -> ValidationResult {
        self.check(payload.individual_id(), payload.individual_id_type())
    }
}
