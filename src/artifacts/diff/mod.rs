//! Edit scripts and hunks
//!
//! This module turns the raw edit notifications of the Myers engine into
//! something printable:
//!
//! - `edit`: a single delete, insert or unchanged element
//! - `script`: the complete edit script, common elements included
//! - `hunk`: groups of nearby changes with surrounding context, rendered with
//!   unified-diff headers

pub mod edit;
pub mod hunk;
pub mod script;
