//! Network-backed evaluation: feed the board's position fingerprint to a
//! [`ChessNetwork`].

use evochess_core::Board;
use evochess_nn::ChessNetwork;

/// Evaluate `board` through `network`. The fingerprint already matches the
/// network's expected 64-character, row-major, top-down alphabet.
pub fn network_score(board: &Board, network: &ChessNetwork) -> f32 {
    let fingerprint = board.fingerprint();
    let position = std::str::from_utf8(&fingerprint).expect("fingerprint bytes are always ASCII");
    network.evaluate(position)
}
