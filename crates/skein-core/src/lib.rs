#![forbid(unsafe_code)]
//! skein-core: value types shared by every layer of the engine.
//!
//! This crate holds the pure data vocabulary of planning: schemas, block-level
//! metadata estimates, and the canonical error type. Operators and plans live
//! in `skein-logical`; execution lives above that. Nothing here does I/O or
//! spawns tasks, so the crate stays dependency-light and easy to embed.

pub mod block;
pub mod error;
pub mod prelude;
pub mod schema;

pub use block::{BlockMetadata, ExecStats};
pub use error::{Error, Result};
pub use schema::{DataType, Field, Schema};
