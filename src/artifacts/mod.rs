//! Sequence comparison data structures and algorithms
//!
//! This module contains the comparison engine and everything built on it:
//!
//! - `core`: Output plumbing (pager writer, paging decision)
//! - `diff`: Edit scripts and hunks built from the engine's output
//! - `myers`: Bounded Myers O(ND) difference algorithm
//! - `similarity`: Fuzzy similarity ratio of two strings

pub mod core;
pub mod diff;
pub mod myers;
pub mod similarity;
