//! Operation rule chains
//!
//! Every operation runs the same envelope check followed by an ordered list of
//! payload rules. The list is data ([`OperationProfile`]), so adding an
//! operation means adding a profile, not another validator.

use super::envelope::EnvelopeValidator;
use super::identity::IdentityDispatcher;
use super::payload::{AuthTypeValidator, PaginationValidator, RequiredField};
use super::{ValidationError, ValidationResult, Validator};
use crate::config::ValidatorConfig;
use crate::types::{fields, Operation, RequestContext, RequestEnvelope, ResidentRequest};
use std::sync::Arc;

/// A single payload rule, applied in profile order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    TransactionId,
    Identity,
    Otp,
    AuthTypes,
    Pagination,
}

impl FieldRule {
    /// Payload rules for an operation, in evaluation order
    pub fn for_operation(operation: Operation) -> &'static [FieldRule] {
        const LOCK: &[FieldRule] = &[
            FieldRule::TransactionId,
            FieldRule::Identity,
            FieldRule::Otp,
            FieldRule::AuthTypes,
        ];
        const HISTORY: &[FieldRule] = &[
            FieldRule::TransactionId,
            FieldRule::Identity,
            FieldRule::Otp,
            FieldRule::Pagination,
        ];
        const BASIC: &[FieldRule] = &[FieldRule::TransactionId, FieldRule::Identity, FieldRule::Otp];

        match operation {
            Operation::AuthLock | Operation::AuthUnlock => LOCK,
            Operation::AuthHistory => HISTORY,
            Operation::Euin | Operation::Reprint => BASIC,
        }
    }
}

/// Everything that distinguishes one operation's validation from another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationProfile {
    pub operation: Operation,
    pub expected_id: String,
    pub expected_version: String,
    pub rules: Vec<FieldRule>,
}

impl OperationProfile {
    pub fn from_config(operation: Operation, config: &ValidatorConfig) -> Self {
        Self {
            operation,
            expected_id: config.ids.for_operation(operation).to_string(),
            expected_version: config.version.clone(),
            rules: FieldRule::for_operation(operation).to_vec(),
        }
    }
}

/// Composite validator for one operation
///
/// Runs the envelope check, then each rule of the profile, stopping at the
/// first rejection.
#[derive(Debug, Clone)]
pub struct RuleChain {
    profile: OperationProfile,
    envelope_validator: EnvelopeValidator,
    identity_dispatcher: IdentityDispatcher,
    auth_type_validator: Arc<AuthTypeValidator>,
    pagination_validator: PaginationValidator,
}

impl RuleChain {
    pub fn build(
        profile: OperationProfile,
        identity_dispatcher: IdentityDispatcher,
        auth_type_validator: Arc<AuthTypeValidator>,
        max_clock_skew: Option<chrono::Duration>,
    ) -> Self {
        let envelope_validator =
            EnvelopeValidator::new(&profile.expected_id, &profile.expected_version)
                .with_max_clock_skew(max_clock_skew);

        Self {
            profile,
            envelope_validator,
            identity_dispatcher,
            auth_type_validator,
            pagination_validator: PaginationValidator::new(),
        }
    }

    /// Build the chain for `operation` straight from configuration
    pub fn for_operation(
        operation: Operation,
        config: &ValidatorConfig,
        identity_dispatcher: IdentityDispatcher,
    ) -> Self {
        Self::build(
            OperationProfile::from_config(operation, config),
            identity_dispatcher,
            Arc::new(AuthTypeValidator::from_config(config)),
            config.max_clock_skew(),
        )
    }

    pub fn profile(&self) -> &OperationProfile {
        &self.profile
    }

    pub fn envelope_validator(&self) -> &EnvelopeValidator {
        &self.envelope_validator
    }

    fn apply<P: ResidentRequest>(
        &self,
        rule: FieldRule,
        context: &RequestContext,
        payload: &P,
    ) -> ValidationResult {
        match rule {
            FieldRule::TransactionId => RequiredField::TransactionId.validate(context, payload),
            FieldRule::Identity => self.identity_dispatcher.validate(context, payload),
            FieldRule::Otp => RequiredField::Otp.validate(context, payload),
            FieldRule::AuthTypes => self.auth_type_validator.validate(context, payload),
            FieldRule::Pagination => self.pagination_validator.validate(context, payload),
        }
    }
}

impl<P: ResidentRequest> Validator<RequestEnvelope<P>> for RuleChain {
    type Error = ValidationError;

    fn validate(&self, context: &RequestContext, envelope: &RequestEnvelope<P>) -> ValidationResult {
        // Step 1: transport-level fields
        self.envelope_validator.validate(context, envelope)?;

        let payload = envelope
            .request
            .as_ref()
            .ok_or_else(|| ValidationError::missing(fields::REQUEST))?;

        // Step 2: payload rules in profile order
        for rule in &self.profile.rules {
            self.apply(*rule, context, payload)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AuthHistoryRequest, AuthLockOrUnlockRequest, ReprintRequest};
    use crate::validation::identity::{IdFormatChecker, UinChecker};

    struct AcceptAll;

    impl IdFormatChecker for AcceptAll {
        fn is_valid(&self, _candidate: &str) -> bool {
            true
        }
    }

    fn permissive_dispatcher() -> IdentityDispatcher {
        IdentityDispatcher::new(Arc::new(AcceptAll), Arc::new(AcceptAll), Arc::new(AcceptAll))
    }

    fn chain(operation: Operation) -> RuleChain {
        RuleChain::for_operation(operation, &ValidatorConfig::default(), permissive_dispatcher())
    }

    fn now() -> String {
        chrono::Utc::now().to_rfc3339()
    }

    fn create_lock_envelope(auth_type: Vec<&str>) -> RequestEnvelope<AuthLockOrUnlockRequest> {
        RequestEnvelope::new(
            "mosip.resident.authlock",
            "v1",
            now(),
            AuthLockOrUnlockRequest {
                transaction_id: Some("12345".to_string()),
                individual_id: Some("12344567".to_string()),
                individual_id_type: Some("UIN".to_string()),
                otp: Some("1232354".to_string()),
                auth_type: Some(auth_type.into_iter().map(String::from).collect()),
            },
        )
    }

    fn create_history_envelope(
        page_start: Option<&str>,
        page_fetch: Option<&str>,
    ) -> RequestEnvelope<AuthHistoryRequest> {
        RequestEnvelope::new(
            "mosip.resident.authhistory",
            "v1",
            now(),
            AuthHistoryRequest {
                transaction_id: Some("12345".to_string()),
                individual_id: Some("123".to_string()),
                individual_id_type: Some("UIN".to_string()),
                otp: Some("111111".to_string()),
                page_start: page_start.map(String::from),
                page_fetch: page_fetch.map(String::from),
            },
        )
    }

    #[test]
    fn test_rule_order_per_operation() {
        assert_eq!(
            FieldRule::for_operation(Operation::AuthUnlock).last(),
            Some(&FieldRule::AuthTypes)
        );
        assert_eq!(
            FieldRule::for_operation(Operation::AuthHistory).last(),
            Some(&FieldRule::Pagination)
        );
        assert_eq!(
            FieldRule::for_operation(Operation::Reprint),
            FieldRule::for_operation(Operation::Euin)
        );
        for operation in Operation::ALL {
            assert_eq!(FieldRule::for_operation(operation)[0], FieldRule::TransactionId);
        }
    }

    #[test]
    fn test_profile_from_config() {
        let profile = OperationProfile::from_config(Operation::Euin, &ValidatorConfig::default());
        assert_eq!(profile.expected_id, "mosip.resident.euin");
        assert_eq!(profile.expected_version, "v1");
        assert_eq!(profile.rules.len(), 3);
    }

    #[test]
    fn test_valid_lock_request_passes() {
        let chain = chain(Operation::AuthLock);
        let context = RequestContext::new(Operation::AuthLock);
        assert!(chain
            .validate(&context, &create_lock_envelope(vec!["bio-FIR"]))
            .is_ok());
    }

    #[test]
    fn test_unsupported_auth_type_rejected() {
        let chain = chain(Operation::AuthLock);
        let context = RequestContext::new(Operation::AuthLock);
        let err = chain
            .validate(&context, &create_lock_envelope(vec!["bio-FMR"]))
            .unwrap_err();
        assert_eq!(err, ValidationError::unsupported_value("authType"));
    }

    #[test]
    fn test_envelope_failure_precedes_payload_rules() {
        let chain = chain(Operation::AuthLock);
        let context = RequestContext::new(Operation::AuthLock);
        let mut envelope = create_lock_envelope(vec!["bio-FMR"]);
        envelope.version = Some("v2".to_string());

        let err = chain.validate(&context, &envelope).unwrap_err();
        assert_eq!(err.field(), "version");
    }

    #[test]
    fn test_first_payload_defect_wins() {
        let chain = chain(Operation::AuthLock);
        let context = RequestContext::new(Operation::AuthLock);
        let mut envelope = create_lock_envelope(vec!["bio-FMR"]);
        if let Some(payload) = envelope.request.as_mut() {
            payload.otp = None;
            payload.transaction_id = Some(String::new());
        }

        let err = chain.validate(&context, &envelope).unwrap_err();
        assert_eq!(err.field(), "transactionID");
    }

    #[test]
    fn test_history_pagination_rules() {
        let chain = chain(Operation::AuthHistory);
        let context = RequestContext::new(Operation::AuthHistory);

        assert!(chain.validate(&context, &create_history_envelope(None, None)).is_ok());
        assert!(chain
            .validate(&context, &create_history_envelope(Some("1"), Some("10")))
            .is_ok());

        let err = chain
            .validate(&context, &create_history_envelope(Some("1Q"), Some("1")))
            .unwrap_err();
        assert_eq!(err, ValidationError::not_numeric("pageStart"));

        let err = chain
            .validate(&context, &create_history_envelope(Some("-11"), Some("-10")))
            .unwrap_err();
        assert_eq!(err.reason(), "must be positive");
    }

    #[test]
    fn test_basic_chain_ignores_operation_specific_fields() {
        // Reprint has no auth type rule, so a payload without one passes
        let chain = chain(Operation::Reprint);
        let context = RequestContext::new(Operation::Reprint);
        let envelope = RequestEnvelope::new(
            "mosip.resident.print",
            "v1",
            now(),
            ReprintRequest {
                transaction_id: Some("9876543210".to_string()),
                individual_id: Some("3542102".to_string()),
                individual_id_type: Some("UIN".to_string()),
                otp: Some("1234".to_string()),
            },
        );
        assert!(chain.validate(&context, &envelope).is_ok());
    }

    #[test]
    fn test_identity_checker_is_consulted() {
        let dispatcher = IdentityDispatcher::new(
            Arc::new(UinChecker::new()),
            Arc::new(AcceptAll),
            Arc::new(AcceptAll),
        );
        let chain =
            RuleChain::for_operation(Operation::AuthLock, &ValidatorConfig::default(), dispatcher);
        let context = RequestContext::new(Operation::AuthLock);

        let err = chain
            .validate(&context, &create_lock_envelope(vec!["bio-FIR"]))
            .unwrap_err();
        assert_eq!(err, ValidationError::identity_format("individualId"));
    }

    #[test]
    fn test_clock_skew_from_config() {
        let config = ValidatorConfig {
            max_clock_skew_secs: Some(5),
            ..Default::default()
        };
        let chain = RuleChain::for_operation(Operation::AuthLock, &config, permissive_dispatcher());
        let context = RequestContext::new(Operation::AuthLock);
        let mut envelope = create_lock_envelope(vec!["bio-FIR"]);
        envelope.request_time = Some("2001-01-01T00:00:00Z".to_string());

        let err = chain.validate(&context, &envelope).unwrap_err();
        assert_eq!(err.reason(), "outside allowed window");
    }
}
