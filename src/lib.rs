// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod io;
pub mod rewrite;

// Re-export the core entry points
pub use crate::rewrite::{convert, stage_names, Stage, STAGES};
