//! The generational evolution loop: tournament, sort, replace, repeat.

use rand::Rng;
use tracing::info;

use evochess_nn::ChessNetwork;

use crate::config::EvolutionConfig;
use crate::persistence::save_population;
use crate::population::{replace_weaker_half, sort_ascending_by_fitness};
use crate::tournament::run_tournament;

/// Run `config.generations` generational cycles starting from a freshly
/// randomized population, persisting the final generation to
/// `config.output_dir`.
///
/// A single process-wide PRNG is threaded through every call site that needs
/// randomness — population initialization, tournament shuffling, and
/// crossover mutation — rather than seeded independently at each site.
pub fn run_evolution(config: &EvolutionConfig, rng: &mut impl Rng) -> std::io::Result<()> {
    let mut population: Vec<ChessNetwork> = (0..config.population_size)
        .map(|_| {
            ChessNetwork::random(&config.network_shape, rng)
                .expect("EvolutionConfig::network_shape must start with 64")
        })
        .collect();

    for generation in 0..config.generations {
        let mut keys = run_tournament(&population, config.tournament_rounds, config.time_budget, rng);
        sort_ascending_by_fitness(&mut population, &mut keys);

        let min = keys.first().copied().unwrap_or(0.0);
        let max = keys.last().copied().unwrap_or(0.0);
        let mean = keys.iter().sum::<f32>() / keys.len() as f32;
        info!(generation, min, max, mean, "generation complete");

        replace_weaker_half(&mut population, config.mutation_rareness, rng);

        let is_final = generation + 1 == config.generations;
        if is_final {
            save_population(&population, &config.output_dir)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn tiny_config(output_dir: std::path::PathBuf) -> EvolutionConfig {
        EvolutionConfig {
            generations: 1,
            population_size: 4,
            mutation_rareness: 10,
            network_shape: vec![64, 4, 1],
            tournament_rounds: 1,
            time_budget: Duration::from_millis(5),
            output_dir,
        }
    }

    #[test]
    fn a_tiny_run_completes_and_persists_every_slot() {
        let dir = std::env::temp_dir().join(format!("evochess-evolve-driver-test-{}", std::process::id()));
        let config = tiny_config(dir.clone());
        let mut rng = StdRng::seed_from_u64(7);

        run_evolution(&config, &mut rng).unwrap();

        for i in 1..=config.population_size {
            let path = dir.join(format!("save_{:04}.txt", i));
            assert!(path.exists(), "expected {path:?} to exist");
            let text = std::fs::read_to_string(&path).unwrap();
            assert!(evochess_nn::ChessNetwork::read(&text).is_ok());
        }

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn identical_seeds_produce_identical_final_populations() {
        let dir_a = std::env::temp_dir().join(format!("evochess-evolve-det-a-{}", std::process::id()));
        let dir_b = std::env::temp_dir().join(format!("evochess-evolve-det-b-{}", std::process::id()));

        let config_a = tiny_config(dir_a.clone());
        let config_b = tiny_config(dir_b.clone());

        run_evolution(&config_a, &mut StdRng::seed_from_u64(123)).unwrap();
        run_evolution(&config_b, &mut StdRng::seed_from_u64(123)).unwrap();

        for i in 1..=config_a.population_size {
            let text_a = std::fs::read_to_string(dir_a.join(format!("save_{:04}.txt", i))).unwrap();
            let text_b = std::fs::read_to_string(dir_b.join(format!("save_{:04}.txt", i))).unwrap();
            assert_eq!(text_a, text_b);
        }

        std::fs::remove_dir_all(&dir_a).unwrap();
        std::fs::remove_dir_all(&dir_b).unwrap();
    }
}
