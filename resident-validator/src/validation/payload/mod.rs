//! Payload field validation components

mod auth_type_validator;
mod pagination_validator;
mod required_field;

pub use auth_type_validator::AuthTypeValidator;
pub use pagination_validator::{Page, PaginationValidator};
pub use required_field::{require_non_blank, RequiredField};
