//! Constraint Validation Framework
//!
//! Applies ordered lists of named predicates to a resource. Hard constraints
//! decide validity; soft constraints only produce advisory warnings.
//!
//! # Failure semantics
//!
//! A predicate that fails internally (returns `Err` or panics) never aborts
//! the run:
//!
//! - hard constraint: fail-closed, reported as `validation error: <name>`
//! - soft constraint: fail-open, logged and dropped
//!
//! Predicates must be side-effect free, so validating the same input twice
//! yields identical results.

pub mod cluster;
pub mod network;

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;
use tracing::{error, warn};
use ts_rs::TS;

use crate::models::CloudResource;

/// Caller-supplied context passed through to every predicate.
///
/// Current constraint sets read none of these fields; they exist for
/// cross-resource checks such as name uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationContext {
    pub region: String,
    pub existing_resources: Vec<CloudResource>,
    pub available_services: Vec<String>,
}

impl ValidationContext {
    pub fn for_region(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Default::default()
        }
    }
}

/// Outcome of validating one resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Internal failure of a predicate, as opposed to a violated constraint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("inconsistent input: {0}")]
    InconsistentInput(String),

    #[error("predicate panicked: {0}")]
    Panicked(String),
}

pub type ConstraintCheck<T> = fn(&T, &ValidationContext) -> Result<bool, ConstraintError>;

/// A named predicate with the message reported when it does not hold
pub struct Constraint<T> {
    pub name: &'static str,
    pub message: &'static str,
    pub check: ConstraintCheck<T>,
}

impl<T> Constraint<T> {
    pub const fn new(name: &'static str, message: &'static str, check: ConstraintCheck<T>) -> Self {
        Self {
            name,
            message,
            check,
        }
    }

    /// Run the predicate, converting a panic into [`ConstraintError::Panicked`]
    pub fn evaluate(&self, resource: &T, context: &ValidationContext) -> Result<bool, ConstraintError> {
        panic::catch_unwind(AssertUnwindSafe(|| (self.check)(resource, context)))
            .unwrap_or_else(|payload| Err(ConstraintError::Panicked(panic_message(payload.as_ref()))))
    }
}

impl<T> std::fmt::Debug for Constraint<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Constraint")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Validate `resource` against hard and soft constraints, in declaration order
pub fn validate_resource<T>(
    resource: &T,
    hard_constraints: &[Constraint<T>],
    soft_constraints: &[Constraint<T>],
    context: &ValidationContext,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for constraint in hard_constraints {
        match constraint.evaluate(resource, context) {
            Ok(true) => {}
            Ok(false) => errors.push(constraint.message.to_string()),
            Err(e) => {
                error!(constraint = constraint.name, error = %e, "Hard constraint check failed");
                errors.push(format!("validation error: {}", constraint.name));
            }
        }
    }

    for constraint in soft_constraints {
        match constraint.evaluate(resource, context) {
            Ok(true) => {}
            Ok(false) => warnings.push(constraint.message.to_string()),
            Err(e) => {
                warn!(constraint = constraint.name, error = %e, "Soft constraint check failed, ignoring");
            }
        }
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// A resource type with registered constraint sets
pub trait Validatable: Sized + 'static {
    fn hard_constraints() -> &'static [Constraint<Self>];

    fn soft_constraints() -> &'static [Constraint<Self>];

    fn validate(&self, context: &ValidationContext) -> ValidationResult {
        validate_resource(self, Self::hard_constraints(), Self::soft_constraints(), context)
    }
}
