use rand::Rng;

use crate::board::ChessMove;
use crate::position::{piece_value, Position};
use crate::types::Score;

const PV_BONUS: Score = 50_000.0;

/// Scores one candidate move for ordering purposes.
///
/// The PV bonus matches by move identity against `pv[ply_index]` alone, not
/// against the node actually being on the principal variation — this is
/// the reference design's own shape (see DESIGN.md) rather than a stricter
/// "is this node on the PV path" check.
///
/// Capture scoring looks up the piece actually sitting on the destination
/// square, so an en-passant capture (whose destination is empty) scores as
/// a quiet move — a known, preserved miscategorisation (see DESIGN.md).
fn score_move(pos: &Position, mv: ChessMove, ply_index: usize, pv: &[ChessMove]) -> Score {
    if pv.get(ply_index) == Some(&mv) {
        return PV_BONUS;
    }
    match pos.piece_at(mv.get_dest()) {
        Some((_, victim)) => piece_value(victim),
        None => 0.0,
    }
}

/// Orders `moves` for search: highest-scoring first, ties broken by a
/// pre-sort random shuffle via the engine's explicit PRNG so that otherwise
/// identical runs don't always explore moves in move-generation order.
pub fn order_moves(
    pos: &Position,
    mut moves: Vec<ChessMove>,
    ply_index: usize,
    pv: &[ChessMove],
    rng: &mut impl Rng,
) -> Vec<ChessMove> {
    // Fisher-Yates shuffle before the (stable) sort, so ties keep a random order.
    for i in (1..moves.len()).rev() {
        let j = rng.random_range(0..=i);
        moves.swap(i, j);
    }

    moves.sort_by(|&a, &b| {
        let sa = score_move(pos, a, ply_index, pv);
        let sb = score_move(pos, b, ply_index, pv);
        sb.partial_cmp(&sa).unwrap()
    });

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ZobristTable;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn zt() -> ZobristTable {
        crate::board::init();
        ZobristTable::new(1)
    }

    #[test]
    fn test_capture_scores_above_quiet() {
        let zt = zt();
        let fen = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2";
        let pos = Position::from_fen(fen, &zt).unwrap();
        let moves = pos.legal_moves();
        let mut rng = StdRng::seed_from_u64(1);
        let ordered = order_moves(&pos, moves, 99, &[], &mut rng);

        // exd5 captures a pawn; it should end up before plain developing moves
        let exd5_pos = ordered
            .iter()
            .position(|mv| mv.to_string() == "e4d5")
            .expect("capture move should be present");
        let e2e3_pos = ordered
            .iter()
            .position(|mv| mv.to_string() == "e2e3")
            .expect("quiet move should be present");
        assert!(exd5_pos < e2e3_pos);
    }

    #[test]
    fn test_pv_move_forced_first() {
        let zt = zt();
        let pos = Position::new(&zt);
        let moves = pos.legal_moves();
        let pv_move = moves[5];
        let mut rng = StdRng::seed_from_u64(2);
        let ordered = order_moves(&pos, moves, 0, std::slice::from_ref(&pv_move), &mut rng);
        assert_eq!(ordered[0], pv_move);
    }
}
