//! Neuron, dense feed-forward network, and composite chess-position network.
//!
//! Three levels of serialization compose positionally: a [`Neuron`] writes
//! its weights and bias, a [`DenseNetwork`] concatenates its neurons layer by
//! layer, and a [`ChessNetwork`] concatenates its 64 preprocessing neurons
//! followed by its dense network. Each level exposes one `read`/`write` pair.

mod chess_net;
mod dense;
mod error;
mod neuron;

pub use chess_net::{ChessNetwork, SQUARES};
pub use dense::DenseNetwork;
pub use error::NetworkError;
pub use neuron::{sigmoid, Neuron};
