//! Block-level metadata estimates flowing through logical-plan inference.
//!
//! Every logical operator can answer "how big is your output" before anything
//! runs; the answer is a [`BlockMetadata`]. `None` in a numeric field always
//! means "cannot be statically determined" — never zero, never a sentinel.

use serde::{Deserialize, Serialize};

/// Estimated (or, post-execution, observed) statistics for one logical output.
///
/// Producers construct complete instances in one step; a `BlockMetadata` is
/// never partially filled and patched later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockMetadata {
    /// Row count, if statically determinable.
    pub num_rows: Option<u64>,
    /// Byte size, if statically determinable.
    pub size_bytes: Option<u64>,
    /// Input files that may contribute rows to this output, in plan order.
    pub input_files: Vec<String>,
    /// Present only on realized plan nodes; always `None` from pure inference.
    pub exec_stats: Option<ExecStats>,
}

impl BlockMetadata {
    pub fn new(
        num_rows: Option<u64>,
        size_bytes: Option<u64>,
        input_files: Vec<String>,
        exec_stats: Option<ExecStats>,
    ) -> Self {
        Self {
            num_rows,
            size_bytes,
            input_files,
            exec_stats,
        }
    }

    /// Metadata with every field unknown. The honest answer when an operator
    /// cannot see through its input.
    pub fn unknown() -> Self {
        Self {
            num_rows: None,
            size_bytes: None,
            input_files: vec![],
            exec_stats: None,
        }
    }
}

/// Statistics recorded while an operator actually ran.
///
/// Only the execution layer produces these; the planning layer treats the
/// struct as opaque cargo on [`BlockMetadata`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecStats {
    pub wall_time_ms: u64,
    pub cpu_time_ms: u64,
    pub peak_mem_bytes: u64,
    pub output_rows: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_has_no_estimates() {
        let meta = BlockMetadata::unknown();
        assert_eq!(meta.num_rows, None);
        assert_eq!(meta.size_bytes, None);
        assert!(meta.input_files.is_empty());
        assert!(meta.exec_stats.is_none());
    }

    #[test]
    fn metadata_serde_round_trip() {
        let meta = BlockMetadata::new(
            Some(42),
            None,
            vec!["a.parquet".into(), "b.parquet".into()],
            Some(ExecStats {
                wall_time_ms: 12,
                cpu_time_ms: 9,
                peak_mem_bytes: 1 << 20,
                output_rows: 42,
            }),
        );
        let json = serde_json::to_string(&meta).unwrap();
        let back: BlockMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(meta, back);
    }
}
