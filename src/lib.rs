//! Sequence comparison with a bounded Myers diff
//!
//! The engine finds a shortest (or, for expensive inputs, near-shortest)
//! edit script between two sequences with the O(ND) divide-and-conquer
//! algorithm and reports it through an [`EditHook`]. On top of it sit line
//! diffs rendered as unified hunks and a similarity ratio for fuzzy string
//! matching.
//!
//! ```rust
//! use diffseq::{DiffOptions, edit_ops, similarity};
//!
//! let ops = edit_ops(b"ABCABBA", b"CBABAC", DiffOptions::default()).unwrap();
//! assert_eq!(ops.len(), 5);
//!
//! let ratio = similarity("kitten", "sitting").unwrap();
//! assert!((ratio - 8.0 / 13.0).abs() < 1e-12);
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::myers::hook::EditHook;
pub use artifacts::myers::options::DiffOptions;
pub use artifacts::myers::{Comparison, Outcome, compare, edit_ops};
pub use artifacts::similarity::{
    similarity, similarity_bounded, similarity_by, similarity_bytes_bounded,
};
