//! Piece base values plus the two positional shaping terms that ride along
//! with material (knight centralisation, pawn advancement/file shaping).

use evochess_core::{Board, Color, PieceKind, Square};

/// Base value of a piece kind, always returned as a positive magnitude; the
/// caller applies the side's sign.
fn base_value(kind: PieceKind) -> f32 {
    match kind {
        PieceKind::Pawn => 100.0,
        PieceKind::Knight => 300.0,
        PieceKind::Bishop => 300.0,
        PieceKind::Rook => 500.0,
        PieceKind::Queen => 900.0,
        PieceKind::King => 0.0,
    }
}

/// `(row, col)` for `sq` in the spec's top-down coordinate system: `col` is
/// the file (0 = A), `row` counts down from the top (0 = rank 8).
pub(crate) fn row_col(sq: Square) -> (i32, i32) {
    let row = 7 - sq.rank().index() as i32;
    let col = sq.file().index() as i32;
    (row, col)
}

/// Penalty subtracted from a knight's magnitude for being off-centre:
/// `(|35 - 10*col| + |35 - 10*row|) / 10`.
fn knight_centralisation_penalty(row: i32, col: i32) -> f32 {
    ((35 - 10 * col).abs() + (35 - 10 * row).abs()) as f32 / 10.0
}

/// Bonus added to a pawn's magnitude for advancing toward its promotion rank
/// and for sitting on a central file.
fn pawn_shaping_bonus(color: Color, row: i32, col: i32) -> f32 {
    let advancement = match color {
        Color::White => 7 - row,
        Color::Black => row,
    } as f32;
    let central_file_penalty = (35 - 10 * col).abs() as f32 / 10.0;
    advancement - central_file_penalty
}

/// Sum of every non-king piece's signed material-and-shaping contribution.
/// Positive favors White, negative favors Black.
pub fn material_score(board: &Board) -> f32 {
    let mut total = 0.0;
    for sq_idx in 0u8..64 {
        let sq = Square::from_index(sq_idx).expect("0..64 is always a valid square index");
        let (Some(kind), Some(color)) = (board.piece_on(sq), board.color_on(sq)) else {
            continue;
        };
        if kind == PieceKind::King {
            continue;
        }

        let (row, col) = row_col(sq);
        let mut magnitude = base_value(kind);
        magnitude += match kind {
            PieceKind::Knight => -knight_centralisation_penalty(row, col),
            PieceKind::Pawn => pawn_shaping_bonus(color, row, col),
            _ => 0.0,
        };

        let sign = match color {
            Color::White => 1.0,
            Color::Black => -1.0,
        };
        total += sign * magnitude;
    }
    total
}
