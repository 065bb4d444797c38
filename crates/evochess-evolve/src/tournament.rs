//! Single games and full tournament rounds between population members.

use std::time::Duration;

use evochess_core::{Board, Color, GameResult};
use evochess_engine::Searcher;
use evochess_nn::ChessNetwork;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Win bonus added to a winner's fitness key.
const WIN_KEY: f32 = 1.0;
/// Draw bonus added to both players' fitness keys.
const DRAW_KEY: f32 = 0.3;

/// Play one game, `white` against `black`, each move bounded by
/// `time_budget`. Returns the terminal result once the game ends.
///
/// A search that returns no root move (an already-terminal position) ends
/// the game immediately rather than calling into alpha-beta at all.
pub fn play_game(white: &ChessNetwork, black: &ChessNetwork, time_budget: Duration) -> GameResult {
    let searcher = Searcher::new();
    let mut board = Board::starting_position();

    loop {
        let result = evochess_core::terminal_result(&board);
        if result != GameResult::Ongoing {
            return result;
        }

        let net = match board.side_to_move() {
            Color::White => white,
            Color::Black => black,
        };
        let (mv, _depth) = searcher.choose_move(&board, Some(net), time_budget);
        match mv {
            Some(mv) => board = board.make_move(mv),
            None => return evochess_core::terminal_result(&board),
        }
    }
}

/// Run one tournament of `rounds` rounds over `population`, returning a
/// fitness key per population slot (index-aligned with `population`).
///
/// Each round shuffles a list of population indices and pairs them up
/// adjacently, playing one game per pair with the first index as White. This
/// is the index-shuffle equivalent of the original's "shuffle the population
/// with a parallel fitness-key array carried along" — the population itself
/// stays in place and only the pairing order is randomized.
pub fn run_tournament(
    population: &[ChessNetwork],
    rounds: u32,
    time_budget: Duration,
    rng: &mut impl Rng,
) -> Vec<f32> {
    let n = population.len();
    let mut keys = vec![0.0f32; n];
    let mut order: Vec<usize> = (0..n).collect();

    for round in 0..rounds {
        order.shuffle(rng);
        for pair in order.chunks_exact(2) {
            let (i, j) = (pair[0], pair[1]);
            let result = play_game(&population[i], &population[j], time_budget);
            match result {
                GameResult::Draw => {
                    keys[i] += DRAW_KEY;
                    keys[j] += DRAW_KEY;
                }
                GameResult::Checkmate { winner: Color::White } => keys[i] += WIN_KEY,
                GameResult::Checkmate { winner: Color::Black } => keys[j] += WIN_KEY,
                GameResult::Ongoing => unreachable!("play_game only returns a terminal result"),
            }
        }
        debug!(round, "tournament round complete");
    }

    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_network(seed: u64) -> ChessNetwork {
        let mut rng = StdRng::seed_from_u64(seed);
        ChessNetwork::random(&[64, 8, 1], &mut rng).unwrap()
    }

    #[test]
    fn play_game_terminates_with_a_time_starved_search() {
        let white = sample_network(1);
        let black = sample_network(2);
        let result = play_game(&white, &black, Duration::from_millis(5));
        assert_ne!(result, GameResult::Ongoing);
    }

    #[test]
    fn tournament_produces_one_key_per_population_slot() {
        let population: Vec<ChessNetwork> = (0..4).map(sample_network).collect();
        let mut rng = StdRng::seed_from_u64(99);
        let keys = run_tournament(&population, 1, Duration::from_millis(5), &mut rng);
        assert_eq!(keys.len(), population.len());
    }

    #[test]
    fn every_game_awards_at_least_the_draw_key_to_both_players() {
        let population: Vec<ChessNetwork> = (0..2).map(sample_network).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let keys = run_tournament(&population, 2, Duration::from_millis(5), &mut rng);
        let total: f32 = keys.iter().sum();
        // Two rounds of a single pairing: each round awards at least 2*DRAW_KEY
        // (a draw) or WIN_KEY (a decisive result), so the total is bounded below.
        assert!(total >= 2.0 * DRAW_KEY);
    }
}
