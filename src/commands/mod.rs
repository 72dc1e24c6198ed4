//! CLI command implementations.
//!
//! Each submodule handles one subcommand: `convert` rewrites a single
//! file or a directory tree, `batch` rewrites every file named in a list
//! file. Both are thin wrappers around [`crate::rewrite::convert`]; all
//! design weight lives in the pipeline.

pub mod batch;
pub mod convert;

pub use batch::run_batch;
pub use convert::{convert_path, ConvertConfig};
