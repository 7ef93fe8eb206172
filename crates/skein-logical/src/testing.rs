//! Test fixtures: leaf operators with canned answers.
//!
//! Real source operators (file scans, in-memory datasets) live outside this
//! layer; tests still need leaves whose estimates they control exactly.

use skein_core::block::BlockMetadata;
use skein_core::schema::Schema;

use crate::operator::{LogicalOperator, OperatorBase, OperatorRef};

/// A leaf operator that reports exactly the metadata and schema it was given.
#[derive(Debug)]
pub struct StubSource {
    base: OperatorBase,
    metadata: BlockMetadata,
    schema: Option<Schema>,
}

impl StubSource {
    pub fn new(metadata: BlockMetadata, schema: Option<Schema>) -> Self {
        Self {
            base: OperatorBase::one_to_one("stub_source", None, None),
            metadata,
            schema,
        }
    }

    /// Source with a known row count and nothing else.
    pub fn with_rows(num_rows: u64) -> Self {
        Self::new(
            BlockMetadata::new(Some(num_rows), None, vec![], None),
            None,
        )
    }

    /// Source whose row count cannot be statically determined, e.g. a
    /// streaming input.
    pub fn unbounded() -> Self {
        Self::new(BlockMetadata::unknown(), None)
    }

    pub fn files(mut self, input_files: Vec<String>) -> Self {
        self.metadata.input_files = input_files;
        self
    }

    pub fn size_bytes(mut self, size_bytes: u64) -> Self {
        self.metadata.size_bytes = Some(size_bytes);
        self
    }

    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn with_num_outputs(mut self, num_outputs: usize) -> Self {
        self.base = OperatorBase::one_to_one("stub_source", None, Some(num_outputs));
        self
    }
}

impl LogicalOperator for StubSource {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn input_dependencies(&self) -> &[OperatorRef] {
        self.base.input_dependencies()
    }

    fn num_outputs(&self) -> Option<usize> {
        self.base.num_outputs()
    }

    fn infer_metadata(&self) -> BlockMetadata {
        self.metadata.clone()
    }

    fn infer_schema(&self) -> Option<Schema> {
        self.schema.clone()
    }
}
