//! Compiler from parse trees to evaluation trees.

mod build;
mod error;
mod format;

pub use build::build;
pub use error::{CompileError, compute_suggestions};
pub use format::{DatetimeCategory, DatetimeLength, NumberFormat};
