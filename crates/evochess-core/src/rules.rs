//! Terminal-result detection: checkmate, stalemate, and the two automatic draws.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::{generate_legal_moves, MoveList};

/// The outcome of a finished (or still-ongoing) game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// The game continues; no terminal condition has been reached.
    Ongoing,
    /// Checkmate. The winner is the side *not* to move in the mated position.
    Checkmate { winner: Color },
    /// Draw by stalemate, the fifty-move rule, threefold repetition, or
    /// insufficient material (bare kings).
    Draw,
}

/// Fifty-move rule threshold: 100 plies (50 full moves) without a capture or
/// pawn advance.
const HALFMOVE_DRAW_THRESHOLD: u16 = 100;

/// Evaluate the terminal status of `board`, generating legal moves internally.
pub fn terminal_result(board: &Board) -> GameResult {
    let moves = generate_legal_moves(board);
    terminal_result_fast(board, &moves)
}

/// Evaluate the terminal status of `board`, given an already-generated move list.
///
/// Checks run in priority order: fifty-move rule, threefold repetition,
/// bare-kings draw, then checkmate/stalemate from the supplied move list.
pub fn terminal_result_fast(board: &Board, moves: &MoveList) -> GameResult {
    if board.halfmove_clock() >= HALFMOVE_DRAW_THRESHOLD {
        return GameResult::Draw;
    }

    let fingerprint = board.fingerprint();
    if board.repetition_count(&fingerprint) >= 2 {
        return GameResult::Draw;
    }

    if board.occupied().count() == 2 {
        return GameResult::Draw;
    }

    if moves.is_empty() {
        let us = board.side_to_move();
        return if board.is_square_attacked(board.king_square(us), us.flip()) {
            GameResult::Checkmate { winner: us.flip() }
        } else {
            GameResult::Draw
        };
    }

    GameResult::Ongoing
}
