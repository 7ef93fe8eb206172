//! The polymorphic logical-operator contract and its shared node state.

use std::fmt;
use std::sync::Arc;

use skein_core::block::BlockMetadata;
use skein_core::schema::Schema;

/// Shared handle to a DAG node. Plans are read-only once built, so nodes are
/// reference-counted and safe to query from multiple threads.
pub type OperatorRef = Arc<dyn LogicalOperator>;

/// A node in a logical plan.
///
/// Implementations are immutable after construction; `infer_metadata` and
/// `infer_schema` are pure functions of the DAG structure, so repeated calls
/// on an unchanged plan return equal results. Absent values (`None`) mean
/// "cannot be statically determined" and are a first-class answer, never a
/// failure.
pub trait LogicalOperator: fmt::Debug + Send + Sync {
    /// Human-readable label for display and debugging only. Never drives
    /// correctness decisions.
    fn name(&self) -> &str;

    /// Upstream dependencies, in plan order. Fixed at construction; sources
    /// have zero, one-to-one operators exactly one.
    fn input_dependencies(&self) -> &[OperatorRef];

    /// Fixed output-partition count, if this operator pins one. Orthogonal
    /// to row-count inference.
    fn num_outputs(&self) -> Option<usize>;

    /// Estimate block-level statistics by recursively pulling from upstream.
    fn infer_metadata(&self) -> BlockMetadata;

    /// Derive the output schema, or `None` when it cannot be statically
    /// determined.
    fn infer_schema(&self) -> Option<Schema>;
}

/// State common to every operator node: name, dependency list, and optional
/// partition count. Concrete operators embed one of these; its constructor is
/// the node's only write path.
#[derive(Debug)]
pub struct OperatorBase {
    name: String,
    input_dependencies: Vec<OperatorRef>,
    num_outputs: Option<usize>,
}

impl OperatorBase {
    pub fn new(
        name: impl Into<String>,
        input_dependencies: Vec<OperatorRef>,
        num_outputs: Option<usize>,
    ) -> Self {
        Self {
            name: name.into(),
            input_dependencies,
            num_outputs,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_dependencies(&self) -> &[OperatorRef] {
        &self.input_dependencies
    }

    pub fn num_outputs(&self) -> Option<usize> {
        self.num_outputs
    }
}
