use crate::board::{Color, ZobristTable};
use crate::position::{piece_value, Position};
use crate::pst;
use crate::types::Score;

const PST_DAMPENING: Score = 300.0;
const OWN_MOBILITY_DAMPENING: Score = 300.0;
const OPPONENT_MOBILITY_DAMPENING: Score = 500.0;

/// Static evaluation of a non-terminal position, White-positive.
///
/// Terminal handling (mate/draw scores) is the Search's job, not this
/// function's — it assumes the position still has legal moves.
pub fn evaluate(pos: &Position, zt: &ZobristTable) -> Score {
    let mut score = pos.material();

    for (sq, color, piece) in pos.piece_map() {
        let value = pst::value_for_color(piece, color, sq.rank().to_index(), sq.file().to_index());
        score += match color {
            Color::White => value as Score / PST_DAMPENING,
            Color::Black => -(value as Score) / PST_DAMPENING,
        };
    }

    score += mobility_term(pos, zt);

    score
}

/// Counts legal moves for the side to move and, via a null move, for the
/// other side, and contributes `own/300 - opponent/500` in White-positive
/// terms. A null move is impossible only when the side to move is in
/// check; that case contributes no mobility term at all (matching the
/// reference design, which never calls this while in check at a leaf).
fn mobility_term(pos: &Position, zt: &ZobristTable) -> Score {
    let side_to_move = pos.turn();
    let own_moves = pos.legal_moves().len() as Score;

    let mut pos = *pos;
    let Some(unmake) = pos.push_null(zt) else {
        return 0.0;
    };
    let opponent_moves = pos.legal_moves().len() as Score;
    pos.pop_null(unmake);

    let own_term = own_moves / OWN_MOBILITY_DAMPENING;
    let opponent_term = opponent_moves / OPPONENT_MOBILITY_DAMPENING;

    match side_to_move {
        Color::White => own_term - opponent_term,
        Color::Black => opponent_term - own_term,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zt() -> ZobristTable {
        crate::board::init();
        ZobristTable::new(7)
    }

    #[test]
    fn test_startpos_near_zero() {
        let zt = zt();
        let pos = Position::new(&zt);
        let score = evaluate(&pos, &zt);
        assert!(score.abs() < 1.0, "startpos score {score} is too far from 0");
    }

    #[test]
    fn test_white_up_queen() {
        let zt = zt();
        let pos = Position::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", &zt).unwrap();
        let score = evaluate(&pos, &zt);
        assert!(score > 8.0, "white up a queen should score high, got {score}");
    }

    #[test]
    fn test_black_up_queen() {
        let zt = zt();
        let pos = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR b KQkq - 0 1", &zt).unwrap();
        let score = evaluate(&pos, &zt);
        assert!(score < -8.0, "black up a queen should score low for white, got {score}");
    }

    #[test]
    fn test_endgame_pawn_up() {
        let zt = zt();
        let pos = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", &zt).unwrap();
        let score = evaluate(&pos, &zt);
        assert!(score > 0.0, "white with extra pawn should be positive, got {score}");
    }

    #[test]
    fn test_piece_value_table() {
        use crate::board::Piece;
        assert_eq!(piece_value(Piece::Queen), 9.0);
        assert_eq!(piece_value(Piece::King), 0.0);
    }
}
