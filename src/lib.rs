#![forbid(unsafe_code)]
//! skein: facade crate over the workspace layers.
//!
//! Re-exports the planning vocabulary from `skein-core` and the logical-plan
//! layer from `skein-logical` under one roof.
//!
//! ```
//! use std::sync::Arc;
//!
//! use skein::{Limit, LogicalOperator, LogicalPlan};
//! use skein_logical::testing::StubSource;
//!
//! let source = Arc::new(StubSource::with_rows(1_000));
//! let plan = LogicalPlan::from(Limit::new(source, 100));
//!
//! assert_eq!(plan.root().infer_metadata().num_rows, Some(100));
//! assert_eq!(plan.to_string(), "limit=100\n  stub_source\n");
//! ```

pub use skein_core::block::{BlockMetadata, ExecStats};
pub use skein_core::error::{Error, Result};
pub use skein_core::schema::{DataType, Field, Schema};
pub use skein_logical::{
    Limit, LogicalOperator, LogicalPlan, OneToOne, OperatorBase, OperatorRef, PlanSummary,
    ValidateError,
};
