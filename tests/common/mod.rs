#![allow(dead_code)]

use chrono::{SecondsFormat, Utc};
use mockall::mock;
use resident_validator::{
    AuthHistoryRequest, AuthLockOrUnlockRequest, EuinRequest, IdFormatChecker, IdentityDispatcher,
    ReprintRequest, RequestEnvelope, RequestValidator, ValidatorConfig,
};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

mock! {
    pub Checker {}

    impl IdFormatChecker for Checker {
        fn is_valid(&self, candidate: &str) -> bool;
    }
}

/// Checker with a fixed answer, for tests that do not care about call counts
#[derive(Debug, Clone, Copy)]
pub struct FixedChecker(pub bool);

impl IdFormatChecker for FixedChecker {
    fn is_valid(&self, _candidate: &str) -> bool {
        self.0
    }
}

/// Test utilities and common setup functions
pub struct TestHelper;

impl TestHelper {
    /// Default configuration with the reprint id used by the resident service tests
    pub fn resident_config() -> ValidatorConfig {
        let mut config = ValidatorConfig::default();
        config.ids.reprint = "resident.print".to_string();
        config
    }

    pub fn dispatcher(uin: bool, vid: bool, rid: bool) -> IdentityDispatcher {
        IdentityDispatcher::new(
            Arc::new(FixedChecker(uin)),
            Arc::new(FixedChecker(vid)),
            Arc::new(FixedChecker(rid)),
        )
    }

    /// Validator whose checkers accept every identifier
    pub fn permissive_validator() -> RequestValidator {
        Self::validator_with(Self::resident_config(), Self::dispatcher(true, true, true))
    }

    pub fn validator_with(config: ValidatorConfig, dispatcher: IdentityDispatcher) -> RequestValidator {
        RequestValidator::new(Arc::new(config), dispatcher)
            .expect("test configuration should be valid")
    }

    /// Current time in the wire format used by resident clients
    pub fn now() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn lock_envelope(id: &str, auth_types: &[&str]) -> RequestEnvelope<AuthLockOrUnlockRequest> {
        RequestEnvelope::new(
            id,
            "v1",
            Self::now(),
            AuthLockOrUnlockRequest {
                transaction_id: Some("12345".to_string()),
                individual_id: Some("12344567".to_string()),
                individual_id_type: Some("UIN".to_string()),
                otp: Some("1232354".to_string()),
                auth_type: Some(auth_types.iter().map(|s| s.to_string()).collect()),
            },
        )
    }

    pub fn euin_envelope() -> RequestEnvelope<EuinRequest> {
        RequestEnvelope::new(
            "mosip.resident.euin",
            "v1",
            Self::now(),
            EuinRequest {
                transaction_id: Some("12345".to_string()),
                individual_id: Some("1234567".to_string()),
                individual_id_type: Some("VID".to_string()),
                otp: Some("12345".to_string()),
            },
        )
    }

    pub fn history_envelope(
        page_start: Option<&str>,
        page_fetch: Option<&str>,
    ) -> RequestEnvelope<AuthHistoryRequest> {
        RequestEnvelope::new(
            "mosip.resident.authhistory",
            "v1",
            Self::now(),
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

    pub fn reprint_envelope() -> RequestEnvelope<ReprintRequest> {
        RequestEnvelope::new(
            "resident.print",
            "v1",
            Self::now(),
            ReprintRequest {
                transaction_id: Some("9876543210".to_string()),
                individual_id: Some("3542102".to_string()),
                individual_id_type: Some("UIN".to_string()),
                otp: Some("1234".to_string()),
            },
        )
    }

    /// Create a temporary directory for test files
    pub fn temp_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temp directory")
    }

    pub fn write_file(dir: &TempDir, filename: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(filename);
        let mut file = std::fs::File::create(&path).expect("Failed to create test file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write test file");
        path
    }
}

/// Test assertions
pub mod assertions {
    use resident_validator::ValidationResult;

    /// Assert a rejection names `field` with `reason`
    pub fn assert_rejected(result: &ValidationResult, field: &str, reason: &str) {
        match result {
            Ok(()) => panic!("expected rejection of {}, got acceptance", field),
            Err(error) => {
                assert_eq!(error.field(), field, "unexpected field in {}", error);
                assert_eq!(error.reason(), reason, "unexpected reason in {}", error);
            }
        }
    }
}
