//! Convenient re-exports for downstream crates.

pub use crate::block::{BlockMetadata, ExecStats};
pub use crate::error::{Error, Result};
pub use crate::schema::{DataType, Field, Schema};
