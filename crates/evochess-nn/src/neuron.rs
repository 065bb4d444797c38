//! A single sigmoid neuron: weights, a bias, and nothing else.

use std::fmt::Write as _;

use rand::Rng;

use crate::error::{NetworkError, TokenReader};

/// Range the random initializer draws weights and the bias from.
const INIT_RANGE: f32 = 100.0;

/// One sigmoid unit: `output = σ(Σ wᵢ·xᵢ + bias)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<f32>,
    bias: f32,
}

impl Neuron {
    /// Build a neuron from explicit weights and bias.
    pub fn new(weights: Vec<f32>, bias: f32) -> Neuron {
        Neuron { weights, bias }
    }

    /// Random neuron with `input_count` weights, each weight and the bias
    /// drawn uniformly from `[-100, 100]`.
    pub fn random(input_count: usize, rng: &mut impl Rng) -> Neuron {
        let weights = (0..input_count)
            .map(|_| rng.random_range(-INIT_RANGE..=INIT_RANGE))
            .collect();
        let bias = rng.random_range(-INIT_RANGE..=INIT_RANGE);
        Neuron { weights, bias }
    }

    /// Number of inputs this neuron accepts.
    pub fn input_count(&self) -> usize {
        self.weights.len()
    }

    /// The weight vector.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// The bias.
    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// `σ(Σ wᵢ·xᵢ + bias)`. `inputs.len()` must equal `self.input_count()`.
    pub fn output(&self, inputs: &[f32]) -> f32 {
        debug_assert_eq!(
            inputs.len(),
            self.weights.len(),
            "neuron fed the wrong number of inputs"
        );
        let sum: f32 = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(w, x)| w * x)
            .sum::<f32>()
            + self.bias;
        sigmoid(sum)
    }

    /// Write `input_count`, then the weights, then the bias, whitespace-separated.
    pub fn write(&self, out: &mut String) {
        let _ = write!(out, "{}\n", self.weights.len());
        for w in &self.weights {
            let _ = write!(out, "{w} ");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.bias);
    }

    /// Read a neuron back from a token stream positioned at its `input_count`.
    pub(crate) fn read(reader: &mut TokenReader) -> Result<Neuron, NetworkError> {
        let input_count = reader.next_usize()?;
        let mut weights = Vec::with_capacity(input_count);
        for _ in 0..input_count {
            weights.push(reader.next_f32()?);
        }
        let bias = reader.next_f32()?;
        Ok(Neuron { weights, bias })
    }
}

/// The logistic function, `1 / (1 + e^-x)`.
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sigmoid_midpoint() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn sigmoid_saturates() {
        assert!(sigmoid(50.0) > 0.999);
        assert!(sigmoid(-50.0) < 0.001);
    }

    #[test]
    fn output_matches_hand_computation() {
        let n = Neuron::new(vec![1.0, 2.0], 0.5);
        let out = n.output(&[1.0, 1.0]);
        assert!((out - sigmoid(3.5)).abs() < 1e-6);
    }

    #[test]
    fn random_weights_within_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = Neuron::random(12, &mut rng);
        assert_eq!(n.input_count(), 12);
        for &w in n.weights() {
            assert!((-100.0..=100.0).contains(&w));
        }
        assert!((-100.0..=100.0).contains(&n.bias()));
    }

    #[test]
    fn round_trip_serialization() {
        let n = Neuron::new(vec![1.5, -2.25, 3.0], 0.75);
        let mut out = String::new();
        n.write(&mut out);
        let mut reader = TokenReader::new(&out);
        let read_back = Neuron::read(&mut reader).unwrap();
        assert_eq!(read_back, n);
    }

    #[test]
    fn read_fails_on_malformed_token() {
        let mut reader = TokenReader::new("3 1.0 2.0 not_a_float 0.5");
        assert!(Neuron::read(&mut reader).is_err());
    }

    #[test]
    fn read_fails_on_truncated_input() {
        let mut reader = TokenReader::new("3 1.0 2.0");
        assert!(Neuron::read(&mut reader).is_err());
    }
}
