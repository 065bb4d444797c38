//! Composite network: one preprocessing neuron per board square, feeding a
//! dense network whose first layer is exactly 64 wide.

use rand::Rng;

use crate::dense::DenseNetwork;
use crate::error::{NetworkError, TokenReader};
use crate::neuron::Neuron;

/// Number of preprocessing neurons — one per board square.
pub const SQUARES: usize = 64;

/// Number of inputs each preprocessing neuron takes — one per symbol in
/// [`PIECE_ORDER`].
const PIECE_INPUTS: usize = 12;

/// One-hot slot order for a square's occupant, lowercase/uppercase pairs
/// adjacent per piece kind. An empty square feeds an all-zero vector.
///
/// This exact order is load-bearing for serialized networks: it determines
/// which weight in a preprocessing neuron corresponds to which piece.
const PIECE_ORDER: [u8; PIECE_INPUTS] = *b"pPkKnNbBrRqQ";

/// A board-evaluation network: 64 per-square preprocessing neurons feeding a
/// dense network whose output is a single scalar evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChessNetwork {
    preprocessing: Vec<Neuron>,
    dense: DenseNetwork,
}

impl ChessNetwork {
    /// Build a network from an already-constructed preprocessing layer and
    /// dense network.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::ShapeMismatch`] if `dense`'s input width isn't
    /// 64, or if `preprocessing` doesn't have exactly 64 neurons.
    pub fn new(preprocessing: Vec<Neuron>, dense: DenseNetwork) -> Result<ChessNetwork, NetworkError> {
        if preprocessing.len() != SQUARES {
            return Err(NetworkError::ShapeMismatch {
                found: preprocessing.len(),
            });
        }
        if dense.input_width() != SQUARES {
            return Err(NetworkError::ShapeMismatch {
                found: dense.input_width(),
            });
        }
        Ok(ChessNetwork { preprocessing, dense })
    }

    /// Build a randomly initialized network. `dense_shape`'s first entry must
    /// be 64; `dense_shape`'s last entry must be 1 (a single evaluation
    /// output).
    pub fn random(dense_shape: &[usize], rng: &mut impl Rng) -> Result<ChessNetwork, NetworkError> {
        let preprocessing = (0..SQUARES).map(|_| Neuron::random(PIECE_INPUTS, rng)).collect();
        let dense = DenseNetwork::random(dense_shape, rng);
        ChessNetwork::new(preprocessing, dense)
    }

    /// The dense network's layer widths.
    pub fn shape(&self) -> &[usize] {
        self.dense.widths()
    }

    /// Evaluate a 64-character row-major, top-down position string (one
    /// character per square, drawn from [`PIECE_ORDER`] or a space for
    /// empty).
    ///
    /// Returns `NaN` if any character falls outside that 13-symbol alphabet.
    pub fn evaluate(&self, position: &str) -> f32 {
        let bytes = position.as_bytes();
        if bytes.len() != SQUARES {
            return f32::NAN;
        }

        let mut dense_inputs = Vec::with_capacity(SQUARES);
        for (sq, &ch) in bytes.iter().enumerate() {
            let one_hot = match one_hot_index(ch) {
                Some(idx) => {
                    let mut v = [0.0f32; PIECE_INPUTS];
                    v[idx] = 1.0;
                    v
                }
                None if ch == b' ' => [0.0f32; PIECE_INPUTS],
                None => return f32::NAN,
            };
            dense_inputs.push(self.preprocessing[sq].output(&one_hot));
        }

        self.dense.forward(&dense_inputs)[0]
    }

    /// Crossover at neuron-slot granularity, independently over the 64
    /// preprocessing neurons and every neuron of the dense network: per slot,
    /// with probability `1/mutation_rareness` the child gets a brand-new
    /// random neuron, otherwise a verbatim copy of one parent's neuron at
    /// that slot chosen by a fair coin flip (weights are never blended
    /// across parents). Parents must share topology (debug-asserted
    /// precondition).
    pub fn crossover(
        a: &ChessNetwork,
        b: &ChessNetwork,
        mutation_rareness: u32,
        rng: &mut impl Rng,
    ) -> ChessNetwork {
        debug_assert_eq!(
            a.preprocessing.len(),
            b.preprocessing.len(),
            "crossover parents disagree on preprocessing layer size"
        );
        let preprocessing = a
            .preprocessing
            .iter()
            .zip(&b.preprocessing)
            .map(|(na, nb)| {
                if mutation_rareness > 0 && rng.random_range(0..mutation_rareness) == 0 {
                    Neuron::random(na.input_count(), rng)
                } else if rng.random_bool(0.5) {
                    na.clone()
                } else {
                    nb.clone()
                }
            })
            .collect();
        let dense = DenseNetwork::crossover(&a.dense, &b.dense, mutation_rareness, rng);
        ChessNetwork { preprocessing, dense }
    }

    /// Write the 64 preprocessing neurons in order, then the dense network.
    pub fn write(&self, out: &mut String) {
        for neuron in &self.preprocessing {
            neuron.write(out);
        }
        self.dense.write(out);
    }

    /// Serialize to a freshly allocated string.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    /// Read a chess network back from serialized text.
    pub fn read(input: &str) -> Result<ChessNetwork, NetworkError> {
        let mut reader = TokenReader::new(input);
        let mut preprocessing = Vec::with_capacity(SQUARES);
        for _ in 0..SQUARES {
            preprocessing.push(Neuron::read(&mut reader)?);
        }
        let dense = DenseNetwork::read(&mut reader)?;
        ChessNetwork::new(preprocessing, dense)
    }
}

/// Index into [`PIECE_ORDER`] for a given position-string byte, or `None`
/// if it isn't one of the 12 piece letters.
fn one_hot_index(ch: u8) -> Option<usize> {
    PIECE_ORDER.iter().position(|&c| c == ch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_network() -> ChessNetwork {
        let mut rng = StdRng::seed_from_u64(11);
        ChessNetwork::random(&[64, 8, 1], &mut rng).unwrap()
    }

    #[test]
    fn shape_mismatch_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = ChessNetwork::random(&[32, 8, 1], &mut rng);
        assert!(matches!(result, Err(NetworkError::ShapeMismatch { found: 32 })));
    }

    #[test]
    fn evaluate_starting_position_is_finite() {
        let net = sample_network();
        let starting = "rnbqkbnrpppppppp                                PPPPPPPPRNBQKBNR";
        let score = net.evaluate(starting);
        assert!(score.is_finite());
    }

    #[test]
    fn evaluate_invalid_character_is_nan() {
        let net = sample_network();
        let mut bad = "rnbqkbnrpppppppp                                PPPPPPPPRNBQKBNR".to_string();
        // Replace one character with something outside the 13-symbol alphabet.
        bad.replace_range(0..1, "X");
        assert!(net.evaluate(&bad).is_nan());
    }

    #[test]
    fn evaluate_wrong_length_is_nan() {
        let net = sample_network();
        assert!(net.evaluate("too short").is_nan());
    }

    #[test]
    fn crossover_preserves_topology() {
        let mut rng = StdRng::seed_from_u64(9);
        let a = sample_network();
        let b = sample_network();
        let child = ChessNetwork::crossover(&a, &b, 20, &mut rng);
        assert_eq!(child.shape(), a.shape());
    }

    #[test]
    fn round_trip_serialization_is_byte_identical() {
        let net = sample_network();
        let text = net.to_text();
        let read_back = ChessNetwork::read(&text).unwrap();
        assert_eq!(read_back.to_text(), text);
    }

    #[test]
    fn read_fails_on_truncated_file() {
        let net = sample_network();
        let text = net.to_text();
        // Cut off partway through — should fail cleanly, not panic.
        let truncated = &text[..text.len() / 2];
        assert!(ChessNetwork::read(truncated).is_err());
    }
}
