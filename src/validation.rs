//! # Structure validation.
//!
//! Thin contract over a rule-based validation engine. Consumers of the bus
//! validate their payload structures before publishing; the bus itself never
//! validates anything (see [`Event`](crate::Event)).
//!
//! [`RulesValidator`] delegates to the [`validator`] crate: annotate a
//! struct with `#[derive(Validate)]` rules and pass it through.

use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Error produced by structure validation.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ValidationError {
    /// One or more rules rejected the structure.
    #[error("validation failed: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Component for rule-based structure validations.
pub trait ValidateStruct: Send + Sync {
    /// Validates the given structure against its declared rules.
    fn validate_struct<T: Validate>(&self, value: &T) -> Result<(), ValidationError>;
}

/// Rule-engine-backed implementation of [`ValidateStruct`].
#[derive(Clone, Copy, Default)]
pub struct RulesValidator;

impl ValidateStruct for RulesValidator {
    fn validate_struct<T: Validate>(&self, value: &T) -> Result<(), ValidationError> {
        value.validate().map_err(ValidationError::from)
    }
}
