/// Lower bound applied to the computed cost threshold of a general comparison
pub const DEFAULT_COST_FLOOR: isize = 256;

/// Tuning knobs for a single comparison
///
/// The defaults favour bounded runtime: the exact search is abandoned once a
/// diagonal search exceeds the cost threshold, and the big-snake heuristic is
/// off (it only pays for itself on very large, sparsely changed inputs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Start the top-level search with `find_minimal` set, so the cost
    /// threshold never fires and the edit script is guaranteed minimal
    pub minimal: bool,
    /// Accept a midpoint early when a diagonal has made disproportionate
    /// progress compared with its cost
    pub heuristic: bool,
    /// Floor for the threshold derived from the input size
    pub cost_floor: isize,
    /// Use this threshold verbatim instead of deriving one from the input size
    pub too_expensive: Option<isize>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            minimal: false,
            heuristic: false,
            cost_floor: DEFAULT_COST_FLOOR,
            too_expensive: None,
        }
    }
}

impl DiffOptions {
    pub fn minimal() -> Self {
        Self::default().with_minimal(true)
    }

    pub fn with_minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }

    pub fn with_heuristic(mut self, heuristic: bool) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_cost_floor(mut self, cost_floor: isize) -> Self {
        self.cost_floor = cost_floor;
        self
    }

    pub fn with_too_expensive(mut self, too_expensive: isize) -> Self {
        self.too_expensive = Some(too_expensive);
        self
    }

    /// Resolves the cost threshold for sequences of the given lengths
    ///
    /// An explicit override wins; otherwise the threshold is the smallest
    /// power of two reached by doubling once per two bits of `xlen + ylen`
    /// (roughly the square root of the input size), floored at `cost_floor`.
    /// The result is never below 1 so the search always has a way out.
    pub fn cost_limit(&self, xlen: usize, ylen: usize) -> isize {
        let limit = match self.too_expensive {
            Some(limit) => limit,
            None => too_expensive(xlen.saturating_add(ylen)).max(self.cost_floor),
        };

        limit.max(1)
    }
}

fn too_expensive(length: usize) -> isize {
    let mut limit: isize = 1;
    let mut remaining = length;

    while remaining != 0 {
        limit <<= 1;
        remaining >>= 2;
    }

    limit
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(3, 2)]
    #[case(4, 4)]
    #[case(15, 4)]
    #[case(16, 8)]
    #[case(1 << 20, 2048)]
    fn test_too_expensive_grows_with_square_root(#[case] length: usize, #[case] expected: isize) {
        assert_eq!(too_expensive(length), expected);
    }

    #[rstest]
    fn test_cost_limit_is_floored_by_default() {
        let options = DiffOptions::default();

        assert_eq!(options.cost_limit(10, 10), DEFAULT_COST_FLOOR);
        assert_eq!(options.cost_limit(1 << 21, 1 << 21), 4096);
    }

    #[rstest]
    fn test_cost_limit_honours_explicit_override() {
        let options = DiffOptions::default().with_too_expensive(8);
        assert_eq!(options.cost_limit(1 << 20, 1 << 20), 8);

        let options = DiffOptions::default().with_too_expensive(0);
        assert_eq!(options.cost_limit(5, 5), 1);
    }

    #[rstest]
    fn test_cost_floor_can_be_lowered() {
        let options = DiffOptions::default().with_cost_floor(0);
        assert_eq!(options.cost_limit(8, 8), 8);
    }
}
