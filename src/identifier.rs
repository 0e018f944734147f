//! # Identifier generation.
//!
//! [`IdFactory`] is the contract for producing correlation/event
//! identifiers; [`UuidFactory`] is the concrete implementation producing
//! time-sortable UUID v7 strings.
//!
//! Identifiers are a consumer-side concern: the bus does not embed them in
//! [`Event`](crate::Event)s. Generate one where an occurrence is born and
//! carry it in the payload if correlation is needed.

use thiserror::Error;
use uuid::Uuid;

/// Error produced by identifier generation.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum IdError {
    /// The underlying generator failed.
    #[error("identifier generation failed: {0}")]
    Generate(String),
}

/// Component in charge of generating unique identifiers.
pub trait IdFactory: Send + Sync {
    /// Generates a unique identifier.
    fn new_id(&self) -> Result<String, IdError>;
}

/// UUID-backed implementation of [`IdFactory`].
///
/// Produces version-7 UUIDs: globally unique and time-sortable, suitable
/// for correlating occurrences across logs.
#[derive(Clone, Copy, Default)]
pub struct UuidFactory;

impl IdFactory for UuidFactory {
    fn new_id(&self) -> Result<String, IdError> {
        Ok(Uuid::now_v7().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_version_7() {
        let id = UuidFactory.new_id().unwrap();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 7);
    }

    #[test]
    fn ids_are_unique() {
        let a = UuidFactory.new_id().unwrap();
        let b = UuidFactory.new_id().unwrap();
        assert_ne!(a, b);
    }
}
