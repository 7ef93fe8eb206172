#![forbid(unsafe_code)]
//! skein-logical: the lazy logical-plan layer (describe → later execute).
//!
//! A logical plan is a DAG of immutable operator nodes. Nodes carry no data;
//! each one describes a transformation and can answer planning questions —
//! estimated row count, byte size, contributing input files, schema — by
//! recursively pulling from its upstream dependencies.
//!
//! Design:
//! - `operator` defines the polymorphic [`LogicalOperator`] contract and the
//!   shared [`OperatorBase`] state every concrete node embeds.
//! - `one_to_one` refines the base to the single-input operator family and
//!   adds the cardinality-mutation query optimizers ask about.
//! - `limit` is the concrete cardinality-bounding operator.
//! - `plan` wraps a DAG root with traversal/rendering helpers; `validate`
//!   checks plan-level structural rules.
//!
//! Everything here is pure and synchronous: no I/O, no mutation after
//! construction, no caching across inference calls.

pub mod limit;
pub mod one_to_one;
pub mod operator;
pub mod plan;
pub mod testing;
pub mod validate;

pub use limit::Limit;
pub use one_to_one::OneToOne;
pub use operator::{LogicalOperator, OperatorBase, OperatorRef};
pub use plan::{LogicalPlan, PlanSummary};
pub use validate::ValidateError;
