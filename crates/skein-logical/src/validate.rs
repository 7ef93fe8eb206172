//! Structural validation for logical plans.
//!
//! Arity bugs are construction-time panics, not validation findings; this
//! pass covers the plan-level rules a well-typed node cannot enforce alone.

use thiserror::Error;

use crate::operator::LogicalOperator;
use crate::plan::LogicalPlan;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    #[error("operator has an empty name")]
    EmptyName,

    #[error("operator '{operator}' declares zero output partitions")]
    ZeroOutputPartitions { operator: String },
}

impl LogicalPlan {
    /// Check plan-level structural rules on every reachable operator.
    pub fn validate(&self) -> Result<(), ValidateError> {
        for op in self.post_order() {
            if op.name().is_empty() {
                return Err(ValidateError::EmptyName);
            }
            if op.num_outputs() == Some(0) {
                return Err(ValidateError::ZeroOutputPartitions {
                    operator: op.name().to_string(),
                });
            }
        }
        Ok(())
    }
}
