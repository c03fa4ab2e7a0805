use crate::artifacts::myers::stats::SearchStats;
use anyhow::Context as _;

/// Forward and backward diagonal vectors shared by every search of a comparison
///
/// Both vectors live back to back in a single buffer. Diagonal `d` of a
/// comparison between sequences of lengths `xlen` and `ylen` ranges over
/// `[-ylen, xlen]`, and the search writes one guard cell past each end, so
/// every vector holds `xlen + ylen + 3` cells and is addressed with a shift of
/// `ylen + 1`.
///
/// The buffer only ever grows, which lets a pool hand the same vectors to
/// successive comparisons of different sizes.
#[derive(Debug, Default)]
pub struct DiagonalVectors {
    cells: Vec<isize>,
    len: usize,
    shift: isize,
}

impl DiagonalVectors {
    /// Allocates vectors large enough for comparing sequences of the given lengths
    ///
    /// Allocation failure is reported as an error instead of aborting, so the
    /// caller decides how to react to memory exhaustion.
    pub fn try_with_lengths(xlen: usize, ylen: usize) -> anyhow::Result<Self> {
        let mut vectors = Self::default();
        vectors.ensure_lengths(xlen, ylen)?;
        Ok(vectors)
    }

    /// Resizes the vectors for a comparison of sequences of the given lengths
    pub fn ensure_lengths(&mut self, xlen: usize, ylen: usize) -> anyhow::Result<()> {
        let len = xlen
            .checked_add(ylen)
            .and_then(|n| n.checked_add(3))
            .filter(|&n| n <= isize::MAX as usize / 2)
            .ok_or_else(|| {
                anyhow::anyhow!("Sequences of {xlen} and {ylen} elements are too long to compare")
            })?;
        let total = len * 2;

        if self.cells.len() < total {
            self.cells
                .try_reserve_exact(total - self.cells.len())
                .with_context(|| {
                    format!("Unable to allocate diagonal vectors for {xlen}x{ylen} comparison")
                })?;
            self.cells.resize(total, 0);
        }

        self.len = len;
        self.shift = ylen as isize + 1;

        Ok(())
    }

    /// Number of cells currently reserved across both vectors
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn slot(&self, diagonal: isize) -> usize {
        let slot = diagonal + self.shift;
        debug_assert!(
            slot >= 0 && (slot as usize) < self.len,
            "diagonal {diagonal} outside of vector bounds"
        );
        slot as usize
    }

    #[inline]
    pub(crate) fn forward(&self, diagonal: isize) -> isize {
        self.cells[self.slot(diagonal)]
    }

    #[inline]
    pub(crate) fn set_forward(&mut self, diagonal: isize, x: isize) {
        let slot = self.slot(diagonal);
        self.cells[slot] = x;
    }

    #[inline]
    pub(crate) fn backward(&self, diagonal: isize) -> isize {
        self.cells[self.len + self.slot(diagonal)]
    }

    #[inline]
    pub(crate) fn set_backward(&mut self, diagonal: isize, x: isize) {
        let slot = self.len + self.slot(diagonal);
        self.cells[slot] = x;
    }
}

/// Mutable state threaded through every diagonal search of one comparison
pub(crate) struct Context<'a, A, B, F> {
    x: &'a [A],
    y: &'a [B],
    eq: &'a F,
    pub(crate) diagonals: &'a mut DiagonalVectors,
    pub(crate) too_expensive: isize,
    pub(crate) heuristic: bool,
    pub(crate) stats: SearchStats,
}

impl<'a, A, B, F> Context<'a, A, B, F>
where
    F: Fn(&A, &B) -> bool,
{
    pub(crate) fn new(
        x: &'a [A],
        y: &'a [B],
        eq: &'a F,
        diagonals: &'a mut DiagonalVectors,
        too_expensive: isize,
        heuristic: bool,
    ) -> Self {
        Self {
            x,
            y,
            eq,
            diagonals,
            too_expensive,
            heuristic,
            stats: SearchStats::new(too_expensive),
        }
    }

    pub(crate) fn xlen(&self) -> isize {
        self.x.len() as isize
    }

    pub(crate) fn ylen(&self) -> isize {
        self.y.len() as isize
    }

    /// Whether `x[xi]` and `y[yi]` are considered equal
    #[inline]
    pub(crate) fn matches(&self, xi: isize, yi: isize) -> bool {
        (self.eq)(&self.x[xi as usize], &self.y[yi as usize])
    }
}
