use crate::artifacts::myers::diag::{MidpointKind, Partition};

/// Counters collected while a comparison runs
///
/// Mostly useful to see how often the cost bound cut a search short; a
/// comparison that never hit either heuristic produced a minimal script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cost threshold the comparison ran with
    pub too_expensive: isize,
    /// Number of diagonal searches (one per split)
    pub searches: usize,
    /// Sum of the cost levels explored across all searches
    pub total_cost: usize,
    /// Highest cost level reached by a single search
    pub max_cost: isize,
    /// Midpoints accepted through the big-snake heuristic
    pub big_snake_midpoints: usize,
    /// Midpoints accepted because a search reached the cost threshold
    pub too_expensive_midpoints: usize,
}

impl SearchStats {
    pub fn new(too_expensive: isize) -> Self {
        Self {
            too_expensive,
            ..Self::default()
        }
    }

    pub(crate) fn record(&mut self, partition: &Partition) {
        self.searches += 1;
        self.total_cost += partition.cost as usize;
        self.max_cost = self.max_cost.max(partition.cost);

        match partition.kind {
            MidpointKind::Overlap => {}
            MidpointKind::BigSnake => self.big_snake_midpoints += 1,
            MidpointKind::TooExpensive => self.too_expensive_midpoints += 1,
        }
    }

    /// Whether every midpoint came from the exact search
    pub fn is_minimal(&self) -> bool {
        self.big_snake_midpoints == 0 && self.too_expensive_midpoints == 0
    }
}
