//! Envelope-level validation components

mod envelope_validator;

pub use envelope_validator::{parse_request_time, EnvelopeValidator};
