//! Request validator façade
//!
//! [`RequestValidator`] owns one [`RuleChain`] per operation and is the
//! entry point the resident service calls before doing any work.

use crate::config::{ConfigError, ValidatorConfig};
use crate::types::{
    AuthHistoryRequest, AuthLockOrUnlockRequest, AuthTypeStatus, EuinRequest, Operation,
    ReprintRequest, RequestContext, RequestEnvelope, ResidentRequest,
};
use crate::validation::identity::IdentityDispatcher;
use crate::validation::payload::AuthTypeValidator;
use crate::validation::{OperationProfile, RuleChain, ValidationResult, Validator};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Validates inbound resident service envelopes
///
/// Immutable after construction and safe to share between threads.
#[derive(Debug, Clone)]
pub struct RequestValidator {
    config: Arc<ValidatorConfig>,
    chains: [RuleChain; 5],
}

impl RequestValidator {
    /// Create a validator with injected identifier checkers
    pub fn new(
        config: Arc<ValidatorConfig>,
        identity_dispatcher: IdentityDispatcher,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let auth_type_validator = Arc::new(AuthTypeValidator::from_config(&config));
        let max_clock_skew = config.max_clock_skew();
        let chains = Operation::ALL.map(|operation| {
            RuleChain::build(
                OperationProfile::from_config(operation, &config),
                identity_dispatcher.clone(),
                Arc::clone(&auth_type_validator),
                max_clock_skew,
            )
        });

        debug!(
            "RequestValidator initialized: version={}, auth_types={:?}, max_clock_skew_secs={:?}",
            config.version,
            auth_type_validator.allowed(),
            config.max_clock_skew_secs
        );

        Ok(Self { config, chains })
    }

    /// Create a validator backed by the bundled UIN/VID/RID checkers
    pub fn with_reference_checkers(config: Arc<ValidatorConfig>) -> Result<Self, ConfigError> {
        Self::new(config, IdentityDispatcher::with_reference_checkers())
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn profile(&self, operation: Operation) -> &OperationProfile {
        self.chain(operation).profile()
    }

    fn chain(&self, operation: Operation) -> &RuleChain {
        &self.chains[operation.index()]
    }

    /// Validate an envelope against the rule chain of `operation`
    ///
    /// `P` must be the payload type for `operation`: [`AuthLockOrUnlockRequest`]
    /// for lock and unlock, [`EuinRequest`], [`AuthHistoryRequest`] or
    /// [`ReprintRequest`]. Fields the payload type does not carry read as
    /// absent, so a mismatched pairing is rejected on the first of them
    /// (for example `authType` when an e-UIN payload is checked as a lock).
    /// The typed `validate_*` methods fix the pairing at compile time.
    pub fn validate_request<P: ResidentRequest>(
        &self,
        envelope: &RequestEnvelope<P>,
        operation: Operation,
    ) -> ValidationResult {
        self.validate_request_at(envelope, &RequestContext::new(operation))
    }

    /// Validate with an explicit context, for callers that pin the clock
    pub fn validate_request_at<P: ResidentRequest>(
        &self,
        envelope: &RequestEnvelope<P>,
        context: &RequestContext,
    ) -> ValidationResult {
        let operation = context.operation;
        let result = self.chain(operation).validate(context, envelope);

        match &result {
            Ok(()) => debug!("Request accepted: operation={}", operation),
            Err(error) => debug!(
                "Request rejected: operation={}, field={}, reason={}",
                operation,
                error.field(),
                error.reason()
            ),
        }

        result
    }

    pub fn validate_auth_lock_or_unlock(
        &self,
        envelope: &RequestEnvelope<AuthLockOrUnlockRequest>,
        status: AuthTypeStatus,
    ) -> ValidationResult {
        self.validate_request(envelope, status.operation())
    }

    pub fn validate_euin(&self, envelope: &RequestEnvelope<EuinRequest>) -> ValidationResult {
        self.validate_request(envelope, Operation::Euin)
    }

    pub fn validate_auth_history(
        &self,
        envelope: &RequestEnvelope<AuthHistoryRequest>,
    ) -> ValidationResult {
        self.validate_request(envelope, Operation::AuthHistory)
    }

    pub fn validate_reprint(&self, envelope: &RequestEnvelope<ReprintRequest>) -> ValidationResult {
        self.validate_request(envelope, Operation::Reprint)
    }

    /// Decode a raw JSON envelope into the payload type of `operation` and validate it
    ///
    /// The outer error is a decoding failure (malformed JSON or wrongly typed
    /// fields); the inner result is the validation verdict.
    pub fn validate_json(
        &self,
        operation: Operation,
        raw: &str,
    ) -> Result<ValidationResult, serde_json::Error> {
        match operation {
            Operation::AuthLock | Operation::AuthUnlock => {
                self.decode_and_validate::<AuthLockOrUnlockRequest>(operation, raw)
            }
            Operation::Euin => self.decode_and_validate::<EuinRequest>(operation, raw),
            Operation::AuthHistory => self.decode_and_validate::<AuthHistoryRequest>(operation, raw),
            Operation::Reprint => self.decode_and_validate::<ReprintRequest>(operation, raw),
        }
    }

    fn decode_and_validate<P>(
        &self,
        operation: Operation,
        raw: &str,
    ) -> Result<ValidationResult, serde_json::Error>
    where
        P: ResidentRequest + DeserializeOwned,
    {
        let envelope: RequestEnvelope<P> = serde_json::from_str(raw)?;
        Ok(self.validate_request(&envelope, operation))
    }
}
