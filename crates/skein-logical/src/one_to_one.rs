//! The one-to-one operator category: exactly one upstream dependency.
//!
//! Map-like, filter-like, and limit-like transformations all share this
//! shape. The category pins the arity invariant in one place and declares
//! the cardinality question each concrete operator must answer.

use crate::operator::{LogicalOperator, OperatorBase, OperatorRef};

impl OperatorBase {
    /// Base state for a one-to-one operator.
    ///
    /// An absent `input_op` yields an empty dependency list; source-like
    /// operators are built on the same base even though they never use
    /// [`OneToOne::input_dependency`]. A present input yields exactly one
    /// dependency.
    pub fn one_to_one(
        name: impl Into<String>,
        input_op: Option<OperatorRef>,
        num_outputs: Option<usize>,
    ) -> Self {
        let deps = match input_op {
            Some(op) => vec![op],
            None => vec![],
        };
        Self::new(name, deps, num_outputs)
    }
}

/// Refinement of [`LogicalOperator`] for operators with a single input and a
/// single logical output stream.
pub trait OneToOne: LogicalOperator {
    /// The sole upstream operator.
    ///
    /// Precondition: exactly one dependency exists. A node with any other
    /// arity reaching this accessor is a construction bug, so this fails
    /// loudly rather than returning a wrong value.
    fn input_dependency(&self) -> &OperatorRef {
        let deps = self.input_dependencies();
        assert!(
            deps.len() == 1,
            "one-to-one operator '{}' has {} dependencies",
            self.name(),
            deps.len()
        );
        &deps[0]
    }

    /// Whether output row count can differ from input row count.
    ///
    /// Advisory metadata for optimizers (e.g. whether count-based rewrites
    /// may push past this node); no other runtime effect in this layer.
    fn can_modify_num_rows(&self) -> bool;
}
