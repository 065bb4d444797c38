//! Time control for iterative deepening: a single wall-clock budget per move.

use std::time::{Duration, Instant};

/// Constant exponent in the "is another iteration affordable" projection.
///
/// The projection is `τ / (0.5 · 10^DEPTH_STEP)`, a fixed fraction of the
/// total budget rather than a true remaining-time estimate — `DEPTH_STEP`
/// does not vary with the current search depth. This mirrors a known
/// simplification in the system this search is modeled on; see DESIGN.md.
const DEPTH_STEP: i32 = 1;

/// Tracks a move's wall-clock time budget and decides when iterative
/// deepening should stop.
pub struct TimeControl {
    start: Instant,
    budget: Duration,
}

impl TimeControl {
    /// Start the clock now, with `budget` as the total per-move allowance.
    pub fn new(budget: Duration) -> TimeControl {
        TimeControl {
            start: Instant::now(),
            budget,
        }
    }

    /// Elapsed time since this control was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// `true` once the hard budget has been exceeded — checked before every
    /// root-child evaluation past the first.
    pub fn is_exhausted(&self) -> bool {
        self.elapsed() >= self.budget
    }

    /// `true` if another iterative-deepening iteration is affordable.
    ///
    /// Compares elapsed time against the fixed-fraction threshold
    /// `τ / (0.5 · 10^DEPTH_STEP)` directly — not a true "time remaining"
    /// projection, just a small fixed allowance (a fifth of the budget, with
    /// the constants above) under which another, presumably much more
    /// expensive, depth is still started.
    pub fn can_afford_next_depth(&self) -> bool {
        let threshold_secs = self.budget.as_secs_f64() / (0.5 * 10f64.powi(DEPTH_STEP));
        let threshold = Duration::from_secs_f64(threshold_secs.max(0.0));
        self.elapsed() <= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_control_is_not_exhausted() {
        let tc = TimeControl::new(Duration::from_secs(1));
        assert!(!tc.is_exhausted());
    }

    #[test]
    fn fresh_control_affords_next_depth() {
        let tc = TimeControl::new(Duration::from_secs(1));
        assert!(tc.can_afford_next_depth());
    }

    #[test]
    fn zero_budget_is_immediately_exhausted() {
        let tc = TimeControl::new(Duration::from_secs(0));
        assert!(tc.is_exhausted());
        assert!(!tc.can_afford_next_depth());
    }
}
