//! Identity validation components
//!
//! Checks the declared identifier type and hands the identifier to the
//! matching format checker.

mod checkers;
mod dispatcher;

pub use checkers::{IdFormatChecker, RidChecker, UinChecker, VidChecker};
pub use dispatcher::IdentityDispatcher;
