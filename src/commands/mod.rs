//! Command implementations
//!
//! Each command is an `impl Session` block writing its report to the
//! session's writer:
//!
//! - `diff`: Line diff of two files rendered as unified hunks
//! - `similarity`: Similarity ratio of two strings or two files

pub mod diff;
pub mod similarity;
