//! Evolution-run parameters.

use std::path::PathBuf;
use std::time::Duration;

/// Everything a single evolution run needs: population shape, genetic
/// operator parameters, tournament structure, and the per-move search
/// budget.
///
/// The original source shipped two divergent configuration snapshots (20 vs
/// 100 generations, 1 vs 2 tournament rounds) rather than two alternative
/// designs; [`EvolutionConfig::default`] takes the larger snapshot's values.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionConfig {
    /// Number of generational replacement cycles to run.
    pub generations: u32,
    /// Population size. Must be even — the lower half is replaced each
    /// generation.
    pub population_size: usize,
    /// `1 / mutation_rareness` is the per-weight mutation probability during
    /// crossover. `0` disables mutation.
    pub mutation_rareness: u32,
    /// Dense-network layer widths, first entry fixed at 64 by
    /// [`evochess_nn::ChessNetwork`]'s construction contract.
    pub network_shape: Vec<usize>,
    /// Tournament rounds played per generation (each round re-shuffles and
    /// re-pairs the whole population).
    pub tournament_rounds: u32,
    /// Wall-clock budget handed to the search for each move played in a
    /// tournament game.
    pub time_budget: Duration,
    /// Directory the final generation's networks are written to.
    pub output_dir: PathBuf,
}

impl Default for EvolutionConfig {
    fn default() -> EvolutionConfig {
        EvolutionConfig {
            generations: 100,
            population_size: 100,
            mutation_rareness: 100,
            network_shape: vec![64, 200, 100, 1],
            tournament_rounds: 2,
            time_budget: Duration::from_millis(100),
            output_dir: PathBuf::from("checkpoints"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_population_is_even() {
        assert_eq!(EvolutionConfig::default().population_size % 2, 0);
    }

    #[test]
    fn default_network_shape_starts_at_64() {
        assert_eq!(EvolutionConfig::default().network_shape[0], 64);
    }
}
