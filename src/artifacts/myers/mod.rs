//! Bounded Myers difference algorithm
//!
//! This module computes the edit script turning a sequence `x` into a
//! sequence `y` with the divide-and-conquer variant of "An O(ND) Difference
//! Algorithm and Its Variations" (Myers, 1986):
//!
//! - `diag`: bidirectional search for a midpoint of a shortest edit path
//! - `partition`: splits the comparison at that midpoint until only pure
//!   insertions or deletions remain, reporting them through an [`EditHook`]
//! - `context`: diagonal vectors and per-comparison state
//! - `hook`: edit notification sinks (closures, counters, recorders)
//! - `options`: cost threshold and heuristic configuration
//! - `stats`: counters describing how each search ended
//!
//! The edit script is never materialised by the engine. Callers decide what
//! to do with each edit, from setting bits in a "changed" map to counting.
//!
//! ## Cost bound
//!
//! Unless [`DiffOptions::minimal`] is set, a single diagonal search gives up
//! after `too_expensive` cost levels and settles for the furthest point
//! reached. The threshold grows with the square root of the input size, which
//! caps the runtime at roughly `O(N^1.5 log N)` instead of `O(N * D)` at the
//! price of an occasionally non-minimal script.
//!
//! ## Debug Logging
//!
//! Build with `--features debug_diff` to trace every split and every time a
//! heuristic cuts a search short.

/// Macro for debug logging that is enabled with the debug_diff feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("split at ({}, {})", xmid, ymid);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(any(feature = "debug_diff"))]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod context;
pub mod diag;
pub mod hook;
pub mod options;
pub mod partition;
pub mod stats;

use crate::artifacts::myers::context::{Context, DiagonalVectors};
use crate::artifacts::myers::hook::{EditHook, EditOp, FnHook, Recorder};
use crate::artifacts::myers::options::DiffOptions;
use crate::artifacts::myers::partition::{Frame, compareseq};
use crate::artifacts::myers::stats::SearchStats;
use derive_new::new;

/// How a comparison ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// The hook stopped the comparison before the script was complete
    pub aborted: bool,
    pub stats: SearchStats,
}

/// A comparison between two sequences under a caller-supplied equality
///
/// ```rust
/// use diffseq::artifacts::myers::Comparison;
/// use diffseq::artifacts::myers::hook::EditCounter;
///
/// let x: Vec<char> = "ABCABBA".chars().collect();
/// let y: Vec<char> = "CBABAC".chars().collect();
/// let mut counter = EditCounter::default();
///
/// Comparison::new(&x, &y, |a: &char, b: &char| a == b)
///     .run(&mut counter)
///     .unwrap();
///
/// assert_eq!(counter.total(), 5);
/// ```
#[derive(new)]
pub struct Comparison<'a, A, B, F> {
    x: &'a [A],
    y: &'a [B],
    eq: F,
    #[new(default)]
    options: DiffOptions,
}

impl<'a, A, B, F> Comparison<'a, A, B, F>
where
    F: Fn(&A, &B) -> bool,
{
    pub fn with_options(self, options: DiffOptions) -> Self {
        Self { options, ..self }
    }

    /// Runs the comparison with freshly allocated diagonal vectors
    pub fn run<H>(&self, hook: &mut H) -> anyhow::Result<Outcome>
    where
        H: EditHook + ?Sized,
    {
        let mut diagonals = DiagonalVectors::try_with_lengths(self.x.len(), self.y.len())?;
        self.run_with_scratch(&mut diagonals, hook)
    }

    /// Runs the comparison reusing `diagonals`, growing them when needed
    pub fn run_with_scratch<H>(
        &self,
        diagonals: &mut DiagonalVectors,
        hook: &mut H,
    ) -> anyhow::Result<Outcome>
    where
        H: EditHook + ?Sized,
    {
        diagonals.ensure_lengths(self.x.len(), self.y.len())?;

        let too_expensive = self.options.cost_limit(self.x.len(), self.y.len());
        let mut ctx = Context::new(
            self.x,
            self.y,
            &self.eq,
            diagonals,
            too_expensive,
            self.options.heuristic,
        );
        let whole = Frame::whole(ctx.xlen(), ctx.ylen(), self.options.minimal);
        let flow = compareseq(&mut ctx, hook, whole);

        debug_log!(
            "compared {}x{} elements: aborted={} stats={:?}",
            self.x.len(),
            self.y.len(),
            flow.is_break(),
            ctx.stats
        );

        Ok(Outcome {
            aborted: flow.is_break(),
            stats: ctx.stats,
        })
    }
}

/// Reports the edit script turning `x` into `y` through two callbacks
///
/// `on_delete(i)` is called for every `x[i]` outside the common subsequence
/// and `on_insert(j)` for every such `y[j]`, in left-to-right order. The only
/// failure is running out of memory for the diagonal vectors.
pub fn compare<A, B, F, D, I>(
    x: &[A],
    y: &[B],
    eq: F,
    on_delete: D,
    on_insert: I,
) -> anyhow::Result<()>
where
    F: Fn(&A, &B) -> bool,
    D: FnMut(usize),
    I: FnMut(usize),
{
    Comparison::new(x, y, eq).run(&mut FnHook::new(on_delete, on_insert))?;
    Ok(())
}

/// Collects the edit script of two sequences of comparable elements
pub fn edit_ops<A, B>(x: &[A], y: &[B], options: DiffOptions) -> anyhow::Result<Vec<EditOp>>
where
    A: PartialEq<B>,
{
    let mut recorder = Recorder::default();
    Comparison::new(x, y, |a: &A, b: &B| a == b)
        .with_options(options)
        .run(&mut recorder)?;

    Ok(recorder.into_ops())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::myers::hook::EditCounter;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn lcs_length<T: PartialEq>(x: &[T], y: &[T]) -> usize {
        let mut row = vec![0usize; y.len() + 1];
        for a in x {
            let mut diagonal = 0;
            for (j, b) in y.iter().enumerate() {
                let above = row[j + 1];
                row[j + 1] = if a == b {
                    diagonal + 1
                } else {
                    above.max(row[j])
                };
                diagonal = above;
            }
        }
        row[y.len()]
    }

    /// Checks that `ops` is a well-formed script and returns the kept subsequence
    fn apply_script<T: PartialEq + Clone + std::fmt::Debug>(
        x: &[T],
        y: &[T],
        ops: &[EditOp],
    ) -> Vec<T> {
        let mut deleted = vec![false; x.len()];
        let mut inserted = vec![false; y.len()];
        let (mut last_x, mut last_y) = (None, None);

        for op in ops {
            match *op {
                EditOp::Delete(i) => {
                    assert!(!deleted[i], "x[{i}] deleted twice");
                    assert!(last_x < Some(i), "deletions out of order");
                    deleted[i] = true;
                    last_x = Some(i);
                }
                EditOp::Insert(j) => {
                    assert!(!inserted[j], "y[{j}] inserted twice");
                    assert!(last_y < Some(j), "insertions out of order");
                    inserted[j] = true;
                    last_y = Some(j);
                }
            }
        }

        let kept_x: Vec<T> = x
            .iter()
            .zip(&deleted)
            .filter(|(_, gone)| !**gone)
            .map(|(v, _)| v.clone())
            .collect();
        let kept_y: Vec<T> = y
            .iter()
            .zip(&inserted)
            .filter(|(_, gone)| !**gone)
            .map(|(v, _)| v.clone())
            .collect();
        assert_eq!(kept_x, kept_y, "untouched elements do not line up");

        kept_x
    }

    fn count(x: &[u8], y: &[u8]) -> EditCounter {
        let mut counter = EditCounter::default();
        Comparison::new(x, y, |a: &u8, b: &u8| a == b)
            .run(&mut counter)
            .unwrap();
        counter
    }

    #[rstest]
    fn test_textbook_example_needs_five_edits() {
        let x = b"ABCABBA";
        let y = b"CBABAC";
        let ops = edit_ops(x, y, DiffOptions::default()).unwrap();
        let kept = apply_script(x, y, &ops);

        assert_eq!(ops.len(), 5);
        assert_eq!(kept.len(), 4);
        assert_eq!(
            ops.iter()
                .filter(|op| matches!(op, EditOp::Delete(_)))
                .count(),
            3
        );
    }

    #[rstest]
    #[case(b"".as_slice(), b"".as_slice(), 0, 0)]
    #[case(b"".as_slice(), b"abc".as_slice(), 0, 3)]
    #[case(b"abc".as_slice(), b"".as_slice(), 3, 0)]
    #[case(b"abc".as_slice(), b"abc".as_slice(), 0, 0)]
    #[case(b"kitten".as_slice(), b"sitting".as_slice(), 2, 3)]
    fn test_edit_counts(
        #[case] x: &[u8],
        #[case] y: &[u8],
        #[case] deletions: usize,
        #[case] insertions: usize,
    ) {
        let counter = count(x, y);
        assert_eq!((counter.deletions, counter.insertions), (deletions, insertions));
    }

    #[rstest]
    fn test_compare_reports_through_closures() {
        let x = ["one", "two", "three"];
        let y = ["one", "three", "four"];
        let mut deleted = Vec::new();
        let mut inserted = Vec::new();

        compare(
            &x,
            &y,
            |a, b| a == b,
            |i| deleted.push(i),
            |j| inserted.push(j),
        )
        .unwrap();

        assert_eq!(deleted, vec![1]);
        assert_eq!(inserted, vec![2]);
    }

    #[rstest]
    fn test_heterogeneous_elements_with_custom_equality() {
        let x = [1u32, 2, 3, 4];
        let y = ["1", "3", "4", "5"];
        let mut counter = EditCounter::default();

        Comparison::new(&x, &y, |a: &u32, b: &&str| a.to_string() == *b)
            .run(&mut counter)
            .unwrap();

        assert_eq!((counter.deletions, counter.insertions), (1, 1));
    }

    #[rstest]
    fn test_large_alternating_input_does_not_exhaust_the_stack() {
        let x: Vec<u32> = (0..20_000).collect();
        let y: Vec<u32> = x
            .iter()
            .map(|v| if v % 2 == 0 { *v } else { v + 1_000_000 })
            .collect();

        let ops = edit_ops(&x, &y, DiffOptions::default()).unwrap();
        let kept = apply_script(&x, &y, &ops);

        assert!(ops.len() >= 20_000);
        assert_eq!(ops.len(), x.len() + y.len() - 2 * kept.len());
    }

    #[rstest]
    fn test_heuristic_script_is_still_valid() {
        // Long runs of common elements separated by small unique blocks.
        let mut x = Vec::new();
        let mut y = Vec::new();
        for block in 0..200u32 {
            for i in 0..100u32 {
                x.push(block * 1000 + i);
                y.push(block * 1000 + i);
            }
            x.extend([u32::MAX - block, u32::MAX - block - 500]);
            y.extend([u32::MAX - block - 1000, u32::MAX - block - 1500]);
        }

        let options = DiffOptions::default().with_heuristic(true);
        let mut recorder = Recorder::default();
        let outcome = Comparison::new(&x, &y, |a: &u32, b: &u32| a == b)
            .with_options(options)
            .run(&mut recorder)
            .unwrap();
        let ops = recorder.into_ops();
        let kept = apply_script(&x, &y, &ops);

        assert!(!outcome.aborted);
        assert!(outcome.stats.big_snake_midpoints > 0);
        assert!(!outcome.stats.is_minimal());
        assert!(ops.len() >= 800);
        assert_eq!(ops.len(), x.len() + y.len() - 2 * kept.len());
    }

    #[rstest]
    fn test_stats_count_every_split() {
        let x = b"a1b2c3d";
        let y = b"a4b5c6d";
        let mut counter = EditCounter::default();
        let outcome = Comparison::new(x.as_slice(), y.as_slice(), |a: &u8, b: &u8| a == b)
            .run(&mut counter)
            .unwrap();

        assert!(outcome.stats.searches > 0);
        assert!(outcome.stats.is_minimal());
        assert_eq!(outcome.stats.too_expensive, 256);
    }

    fn small_alphabet() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(0u8..4, 0..40)
    }

    proptest! {
        #[test]
        fn prop_identical_sequences_need_no_edits(s in small_alphabet()) {
            let counter = count(&s, &s);
            prop_assert_eq!(counter.total(), 0);
        }

        #[test]
        fn prop_scripts_mirror_each_other(x in small_alphabet(), y in small_alphabet()) {
            let forward = count(&x, &y);
            let backward = count(&y, &x);
            prop_assert_eq!(forward.deletions, backward.insertions);
            prop_assert_eq!(forward.insertions, backward.deletions);
        }

        #[test]
        fn prop_common_affixes_do_not_change_edit_count(
            x in small_alphabet(),
            y in small_alphabet(),
            prefix in small_alphabet(),
            suffix in small_alphabet(),
        ) {
            let wrap = |s: &[u8]| [prefix.as_slice(), s, suffix.as_slice()].concat();
            let plain = count(&x, &y);
            let wrapped = count(&wrap(&x), &wrap(&y));
            prop_assert_eq!(plain.total(), wrapped.total());
        }

        #[test]
        fn prop_minimal_script_matches_longest_common_subsequence(
            x in small_alphabet(),
            y in small_alphabet(),
        ) {
            let ops = edit_ops(&x, &y, DiffOptions::minimal()).unwrap();
            let kept = apply_script(&x, &y, &ops);
            let lcs = lcs_length(&x, &y);
            prop_assert_eq!(kept.len(), lcs);
            prop_assert_eq!(ops.len(), x.len() + y.len() - 2 * lcs);
        }

        #[test]
        fn prop_cost_bound_is_respected_per_search(
            x in prop::collection::vec(0u8..8, 0..120),
            y in prop::collection::vec(0u8..8, 0..120),
            too_expensive in 2isize..6,
        ) {
            let options = DiffOptions::default().with_too_expensive(too_expensive);
            let mut recorder = Recorder::default();
            let outcome = Comparison::new(&x, &y, |a: &u8, b: &u8| a == b)
                .with_options(options)
                .run(&mut recorder)
                .unwrap();
            let ops = recorder.into_ops();
            let kept = apply_script(&x, &y, &ops);

            prop_assert!(outcome.stats.max_cost <= too_expensive);
            prop_assert!(kept.len() <= lcs_length(&x, &y));
            prop_assert_eq!(ops.len(), x.len() + y.len() - 2 * kept.len());
        }
    }
}
