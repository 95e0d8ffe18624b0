//! Envelope validation shared by every operation

use crate::types::{fields, RequestContext, RequestEnvelope};
use crate::validation::{ValidationError, ValidationResult, Validator};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Validates the transport-level fields of a request envelope
///
/// Checks run in a fixed order and stop at the first failure:
/// - `request` is present
/// - `id` matches the expected id for the operation
/// - `version` matches the expected version
/// - `requesttime` parses, and lies inside the clock-skew window when one is set
#[derive(Debug, Clone)]
pub struct EnvelopeValidator {
    expected_id: String,
    expected_version: String,
    max_clock_skew: Option<chrono::Duration>,
}

impl EnvelopeValidator {
    pub fn new(expected_id: impl Into<String>, expected_version: impl Into<String>) -> Self {
        Self {
            expected_id: expected_id.into(),
            expected_version: expected_version.into(),
            max_clock_skew: None,
        }
    }

    pub fn with_max_clock_skew(mut self, max_clock_skew: Option<chrono::Duration>) -> Self {
        self.max_clock_skew = max_clock_skew;
        self
    }

    pub fn expected_id(&self) -> &str {
        &self.expected_id
    }

    pub fn expected_version(&self) -> &str {
        &self.expected_version
    }

    fn validate_request_time(
        &self,
        context: &RequestContext,
        request_time: Option<&str>,
    ) -> ValidationResult {
        let request_time = request_time
            .and_then(parse_request_time)
            .ok_or_else(|| ValidationError::invalid_format(fields::REQUEST_TIME))?;

        if let Some(max_skew) = self.max_clock_skew {
            let drift = if context.now >= request_time {
                context.now - request_time
            } else {
                request_time - context.now
            };
            if drift > max_skew {
                return Err(ValidationError::outside_window(fields::REQUEST_TIME));
            }
        }

        Ok(())
    }
}

impl<P> Validator<RequestEnvelope<P>> for EnvelopeValidator {
    type Error = ValidationError;

    fn validate(&self, context: &RequestContext, envelope: &RequestEnvelope<P>) -> ValidationResult {
        if envelope.request.is_none() {
            return Err(ValidationError::missing(fields::REQUEST));
        }

        if envelope.id.as_deref() != Some(self.expected_id.as_str()) {
            return Err(ValidationError::mismatch(fields::ID));
        }

        if envelope.version.as_deref() != Some(self.expected_version.as_str()) {
            return Err(ValidationError::mismatch(fields::VERSION));
        }

        self.validate_request_time(context, envelope.request_time.as_deref())
    }
}

/// Parse a request timestamp as UTC.
///
/// Accepts RFC 3339 with any offset, and offset-less
/// `YYYY-MM-DDTHH:MM:SS[.fff]` which is read as UTC.
pub fn parse_request_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
