//! Fitness-based sorting and generational replacement.

use evochess_nn::ChessNetwork;
use rand::Rng;

/// Sort `population` ascending by `keys` (lowest fitness first), keeping the
/// two arrays aligned.
///
/// The original source's ascending branch is correct; only its *descending*
/// branch has the confirmed decrementing-loop-index defect noted in
/// DESIGN.md, and this driver never needs a descending sort (the weakest
/// half is always the low end of an ascending order). An ordinary stable
/// sort replaces both branches here.
pub fn sort_ascending_by_fitness(population: &mut Vec<ChessNetwork>, keys: &mut Vec<f32>) {
    let mut paired: Vec<(f32, ChessNetwork)> = keys.drain(..).zip(population.drain(..)).collect();
    paired.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    for (key, net) in paired {
        keys.push(key);
        population.push(net);
    }
}

/// Parent indices, into the surviving upper half, for replacement slot `j`
/// (0-indexed within the lower half being replaced).
///
/// Kept in this `rem_euclid` form rather than simplified, to mirror the
/// normative `(j - half) mod half` / `(j + 1) mod half` formula exactly.
fn replacement_parents(j: usize, half: usize) -> (usize, usize) {
    let half = half as i64;
    let j = j as i64;
    let a = (j - half).rem_euclid(half) as usize;
    let b = (j + 1).rem_euclid(half) as usize;
    (a, b)
}

/// Replace the lower (weaker) half of an ascending-sorted `population` with
/// children of the upper (stronger) half, using fixed-index pairing so every
/// survivor contributes to the next generation.
pub fn replace_weaker_half(
    population: &mut [ChessNetwork],
    mutation_rareness: u32,
    rng: &mut impl Rng,
) {
    let half = population.len() / 2;
    let upper: Vec<ChessNetwork> = population[half..].to_vec();

    for j in 0..half {
        let (a, b) = replacement_parents(j, half);
        population[j] = ChessNetwork::crossover(&upper[a], &upper[b], mutation_rareness, rng);
    }
}
