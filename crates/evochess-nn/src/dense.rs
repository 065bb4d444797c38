//! A feed-forward stack of [`Neuron`] layers.

use std::fmt::Write as _;

use rand::Rng;

use crate::error::{NetworkError, TokenReader};
use crate::neuron::Neuron;

/// A sequence of layer widths, the first being pure inputs (no neurons) and
/// every subsequent width holding that many neurons, each wired to every
/// output of the previous layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseNetwork {
    widths: Vec<usize>,
    /// `layers[i]` holds `widths[i + 1]` neurons of input count `widths[i]`.
    layers: Vec<Vec<Neuron>>,
}

impl DenseNetwork {
    /// Build a network with a random weight/bias for every neuron implied by
    /// `widths` (e.g. `[64, 16, 1]` is a 64-input, one-hidden-layer, 1-output
    /// network).
    ///
    /// # Panics
    ///
    /// Panics if `widths` has fewer than two entries.
    pub fn random(widths: &[usize], rng: &mut impl Rng) -> DenseNetwork {
        assert!(widths.len() >= 2, "a dense network needs at least an input and output layer");
        let layers = widths
            .windows(2)
            .map(|w| {
                let (prev, this) = (w[0], w[1]);
                (0..this).map(|_| Neuron::random(prev, rng)).collect()
            })
            .collect();
        DenseNetwork {
            widths: widths.to_vec(),
            layers,
        }
    }

    /// The layer widths, including the input layer at index 0.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// The width of the first (input) layer.
    pub fn input_width(&self) -> usize {
        self.widths[0]
    }

    /// The width of the last (output) layer.
    pub fn output_width(&self) -> usize {
        *self.widths.last().expect("widths is never empty")
    }

    /// Run the forward pass. `inputs.len()` must equal [`Self::input_width`].
    pub fn forward(&self, inputs: &[f32]) -> Vec<f32> {
        debug_assert_eq!(inputs.len(), self.input_width());
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.iter().map(|n| n.output(&activations)).collect();
        }
        activations
    }

    /// Crossover at neuron-slot granularity: for every neuron slot, with
    /// probability `1/mutation_rareness` the child gets a brand-new random
    /// neuron, otherwise a verbatim copy of one parent's neuron at that slot
    /// chosen by a fair coin flip. A neuron's weights and bias are never
    /// blended across parents — the whole neuron is the unit of inheritance.
    /// `a` and `b` must share topology (checked via `debug_assert!` — a
    /// caller contract violation, not a recoverable error).
    pub fn crossover(
        a: &DenseNetwork,
        b: &DenseNetwork,
        mutation_rareness: u32,
        rng: &mut impl Rng,
    ) -> DenseNetwork {
        debug_assert_eq!(a.widths, b.widths, "crossover parents disagree on topology");
        let layers = a
            .layers
            .iter()
            .zip(&b.layers)
            .map(|(layer_a, layer_b)| {
                layer_a
                    .iter()
                    .zip(layer_b)
                    .map(|(na, nb)| {
                        if mutation_rareness > 0 && rng.random_range(0..mutation_rareness) == 0 {
                            Neuron::random(na.input_count(), rng)
                        } else if rng.random_bool(0.5) {
                            na.clone()
                        } else {
                            nb.clone()
                        }
                    })
                    .collect()
            })
            .collect();
        DenseNetwork {
            widths: a.widths.clone(),
            layers,
        }
    }

    /// Write `layer_count`, the widths, then every neuron layer by layer.
    pub fn write(&self, out: &mut String) {
        let _ = writeln!(out, "{}", self.widths.len());
        for w in &self.widths {
            let _ = write!(out, "{w} ");
        }
        let _ = writeln!(out);
        for layer in &self.layers {
            for neuron in layer {
                neuron.write(out);
            }
        }
    }

    /// Read a dense network back, starting at its `layer_count` token.
    pub(crate) fn read(reader: &mut TokenReader) -> Result<DenseNetwork, NetworkError> {
        let layer_count = reader.next_usize()?;
        let mut widths = Vec::with_capacity(layer_count);
        for _ in 0..layer_count {
            widths.push(reader.next_usize()?);
        }
        let mut layers = Vec::with_capacity(layer_count.saturating_sub(1));
        for &width in widths.iter().skip(1) {
            let mut layer = Vec::with_capacity(width);
            for _ in 0..width {
                layer.push(Neuron::read(reader)?);
            }
            layers.push(layer);
        }
        Ok(DenseNetwork { widths, layers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn forward_pass_shape() {
        let mut rng = StdRng::seed_from_u64(0);
        let net = DenseNetwork::random(&[4, 3, 1], &mut rng);
        let out = net.forward(&[0.1, 0.2, 0.3, 0.4]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn widths_roundtrip() {
        let mut rng = StdRng::seed_from_u64(1);
        let net = DenseNetwork::random(&[64, 16, 1], &mut rng);
        assert_eq!(net.widths(), &[64, 16, 1]);
        assert_eq!(net.input_width(), 64);
        assert_eq!(net.output_width(), 1);
    }

    #[test]
    fn crossover_preserves_topology() {
        let mut rng = StdRng::seed_from_u64(2);
        let a = DenseNetwork::random(&[4, 3, 1], &mut rng);
        let b = DenseNetwork::random(&[4, 3, 1], &mut rng);
        let child = DenseNetwork::crossover(&a, &b, 10, &mut rng);
        assert_eq!(child.widths(), a.widths());
    }

    #[test]
    fn crossover_without_mutation_only_copies_whole_parent_neurons() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = DenseNetwork::random(&[3, 2, 1], &mut rng);
        let b = DenseNetwork::random(&[3, 2, 1], &mut rng);
        let child = DenseNetwork::crossover(&a, &b, 0, &mut rng);
        for layer_idx in 0..child.layers.len() {
            for (na, (nb, nc)) in a.layers[layer_idx]
                .iter()
                .zip(b.layers[layer_idx].iter().zip(&child.layers[layer_idx]))
            {
                assert!(nc == na || nc == nb, "child neuron must be a whole copy of one parent, never a blend");
            }
        }
    }

    #[test]
    fn serialization_round_trip() {
        let mut rng = StdRng::seed_from_u64(3);
        let net = DenseNetwork::random(&[4, 3, 2, 1], &mut rng);
        let mut out = String::new();
        net.write(&mut out);
        let mut reader = TokenReader::new(&out);
        let read_back = DenseNetwork::read(&mut reader).unwrap();
        assert_eq!(read_back, net);
    }

    #[test]
    fn reserialized_bytes_are_identical() {
        let mut rng = StdRng::seed_from_u64(4);
        let net = DenseNetwork::random(&[3, 2, 1], &mut rng);
        let mut first = String::new();
        net.write(&mut first);
        let mut reader = TokenReader::new(&first);
        let read_back = DenseNetwork::read(&mut reader).unwrap();
        let mut second = String::new();
        read_back.write(&mut second);
        assert_eq!(first, second);
    }
}
