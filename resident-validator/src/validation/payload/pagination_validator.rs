//! Pagination validation for auth history requests

use crate::types::{fields, RequestContext, ResidentRequest};
use crate::validation::{ValidationError, ValidationResult, Validator};

/// Validates the optional `pageStart` / `pageFetch` pair
///
/// - Both absent: pagination not requested
/// - One absent: the missing half is rejected
/// - Both present: each must be a positive base-10 integer, `pageStart` first
#[derive(Debug, Default, Clone)]
pub struct PaginationValidator;

/// Parsed page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub start: i64,
    pub fetch: i64,
}

impl PaginationValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, page_start: Option<&str>, page_fetch: Option<&str>) -> ValidationResult<Option<Page>> {
        match (page_start, page_fetch) {
            (None, None) => Ok(None),
            (Some(_), None) => Err(ValidationError::unpaired(fields::PAGE_FETCH)),
            (None, Some(_)) => Err(ValidationError::unpaired(fields::PAGE_START)),
            (Some(start), Some(fetch)) => {
                let start = parse_page_value(fields::PAGE_START, start)?;
                let fetch = parse_page_value(fields::PAGE_FETCH, fetch)?;
                Ok(Some(Page { start, fetch }))
            }
        }
    }
}

impl<P: ResidentRequest> Validator<P> for PaginationValidator {
    type Error = ValidationError;

    fn validate(&self, _context: &RequestContext, payload: &P) -> ValidationResult {
        self.check(payload.page_start(), payload.page_fetch())
            .map(|_| ())
    }
}

fn parse_page_value(field: &'static str, raw: &str) -> ValidationResult<i64> {
    let value: i64 = raw
        .parse()
        .map_err(|_| ValidationError::not_numeric(field))?;

    if value <= 0 {
        return Err(ValidationError::not_positive(field));
    }

    Ok(value)
}
