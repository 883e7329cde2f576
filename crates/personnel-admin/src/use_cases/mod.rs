//! One use case per operation and entity family.
//!
//! Every use case is stateless apart from its repository handle, so it can be
//! built per request. Validation runs before any write; the uniqueness pre-check
//! and the write are not atomic, so unique-constraint failures reported by the
//! store are translated into the same field errors the pre-check produces.

pub mod employee;
pub mod employer;
mod error;
pub mod passport;
pub(crate) mod support;
pub mod visa;

#[cfg(test)]
mod tests;

pub use error::{UseCaseError, UseCaseResult};

/// Default look-ahead for expiring-document queries.
pub const DEFAULT_EXPIRY_WINDOW_DAYS: u32 = 90;
