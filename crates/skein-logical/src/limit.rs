//! Limit: keep at most N rows, in upstream order, dropping the remainder.
//!
//! Purely a planning-time description; no row selection happens here.

use skein_core::block::BlockMetadata;
use skein_core::schema::Schema;

use crate::one_to_one::OneToOne;
use crate::operator::{LogicalOperator, OperatorBase, OperatorRef};

/// Logical operator bounding its input to at most `limit` rows.
#[derive(Debug)]
pub struct Limit {
    base: OperatorBase,
    limit: u64,
}

impl Limit {
    pub fn new(input_op: OperatorRef, limit: u64) -> Self {
        Self {
            base: OperatorBase::one_to_one(format!("limit={limit}"), Some(input_op), None),
            limit,
        }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl LogicalOperator for Limit {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn input_dependencies(&self) -> &[OperatorRef] {
        self.base.input_dependencies()
    }

    fn num_outputs(&self) -> Option<usize> {
        self.base.num_outputs()
    }

    /// Post-limit estimate. If the upstream count is an exact value or an
    /// upper bound, `min(count, limit)` is the same kind of bound; size in
    /// bytes is never estimated because row size is not assumed uniform.
    fn infer_metadata(&self) -> BlockMetadata {
        let upstream = self.input_dependency().infer_metadata();
        // Unknown upstream stays unknown: defaulting to `limit` would present
        // a guess as a known count to the optimizer.
        let num_rows = upstream.num_rows.map(|rows| rows.min(self.limit));

        #[cfg(feature = "tracing")]
        tracing::trace!(limit = self.limit, rows = ?num_rows, "inferred limit metadata");

        // Limiting rows does not change which files may have contributed.
        BlockMetadata::new(num_rows, None, upstream.input_files, None)
    }

    /// Truncating rows never changes column structure or types.
    fn infer_schema(&self) -> Option<Schema> {
        self.input_dependency().infer_schema()
    }
}

impl OneToOne for Limit {
    fn can_modify_num_rows(&self) -> bool {
        true
    }
}
