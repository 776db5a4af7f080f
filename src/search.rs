//! Alpha-beta negamax with iterative deepening and a capture-only
//! extension at the frontier. Scores stay in absolute White-positive terms
//! throughout (never sign-flipped on the way back up); `turn_sign` says
//! which direction "better" points at the node currently deciding.

use crate::board::ChessMove;
use crate::engine::Engine;
use crate::evaluation::evaluate;
use crate::movegen::order_moves;
use crate::position::Outcome;
use crate::types::{CUTOFF_SENTINEL, DRAW_SCORE, MATE_BASE, Score};

fn outcome_score(outcome: Outcome, depth: u8) -> Score {
    match outcome {
        Outcome::Draw => DRAW_SCORE,
        Outcome::WhiteWins => MATE_BASE + depth as Score,
        Outcome::BlackWins => -MATE_BASE - depth as Score,
    }
}

impl Engine {
    /// `(score, principal_variation)` for the subtree rooted at the current
    /// position, searched to `depth` plies with `turn_sign = +1` if White
    /// is to move at this node, `-1` if Black.
    pub(crate) fn negamax(
        &mut self,
        depth: u8,
        turn_sign: Score,
        alpha: Score,
        beta: Score,
    ) -> (Score, Vec<ChessMove>) {
        self.nodes += 1;

        if depth < 1 {
            if let Some(outcome) = self.position.outcome() {
                return (outcome_score(outcome, depth), Vec::new());
            }
            return (self.quiescence(turn_sign, alpha, beta), Vec::new());
        }

        let moves = self.position.legal_moves();
        if moves.is_empty() {
            let outcome = self.position.outcome().expect("no legal moves implies a terminal outcome");
            return (outcome_score(outcome, depth), Vec::new());
        }

        let ply_index = self.best_line_probe_index;
        let pv = self.pv.clone();
        let ordered = order_moves(&self.position, moves, ply_index, &pv, &mut self.rng);

        let mut alpha = alpha;
        let mut beta = beta;
        let mut best_score = Score::NEG_INFINITY * turn_sign;
        let mut best_line: Vec<ChessMove> = Vec::new();

        for mv in ordered {
            let unmake = self.position.push(mv, &self.zt);
            let key = self.position.zobrist();

            let (child_score, child_line) = match self.tt.get(depth - 1, key) {
                Some(cached) => {
                    self.skips += 1;
                    (cached, Vec::new())
                }
                None => {
                    self.best_line_probe_index += 1;
                    let result = self.negamax(depth - 1, -turn_sign, alpha, beta);
                    self.best_line_probe_index -= 1;
                    self.tt.insert(depth - 1, key, result.0);
                    result
                }
            };

            self.position.pop(unmake);

            let improves = if turn_sign > 0.0 { child_score > best_score } else { child_score < best_score };
            if improves {
                best_score = child_score;
                let mut line = vec![mv];
                line.extend(child_line);
                best_line = line;

                if turn_sign > 0.0 {
                    alpha = alpha.max(best_score);
                    if best_score >= beta {
                        return (CUTOFF_SENTINEL, Vec::new());
                    }
                } else {
                    beta = beta.min(best_score);
                    if best_score <= alpha {
                        return (-CUTOFF_SENTINEL, Vec::new());
                    }
                }
            }
        }

        (best_score, best_line)
    }

    /// Stand-pat + captures-only alpha-beta past the nominal search depth.
    fn quiescence(&mut self, turn_sign: Score, alpha: Score, beta: Score) -> Score {
        self.nodes += 1;

        if let Some(outcome) = self.position.outcome() {
            return outcome_score(outcome, 0);
        }

        let stand_pat = evaluate(&self.position, &self.zt);
        let mut alpha = alpha;
        let mut beta = beta;

        if turn_sign > 0.0 {
            if stand_pat >= beta {
                return beta;
            }
            alpha = alpha.max(stand_pat);
        } else {
            if stand_pat <= alpha {
                return alpha;
            }
            beta = beta.min(stand_pat);
        }

        let captures: Vec<ChessMove> = self
            .position
            .legal_moves()
            .into_iter()
            .filter(|mv| self.position.is_capture(*mv))
            .collect();

        if captures.is_empty() {
            return stand_pat;
        }

        let ordered = order_moves(&self.position, captures, usize::MAX, &[], &mut self.rng);
        let mut best = stand_pat;

        for mv in ordered {
            let unmake = self.position.push(mv, &self.zt);
            let score = self.quiescence(-turn_sign, alpha, beta);
            self.position.pop(unmake);

            if turn_sign > 0.0 {
                if score > best {
                    best = score;
                }
                if best > alpha {
                    alpha = best;
                }
                if alpha >= beta {
                    return beta;
                }
            } else {
                if score < best {
                    best = score;
                }
                if best < beta {
                    beta = best;
                }
                if beta <= alpha {
                    return alpha;
                }
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use crate::types::EngineConfig;

    use super::*;
    use crate::engine::Engine;

    fn engine(max_depth: u8) -> Engine {
        crate::board::init();
        Engine::new(EngineConfig { max_depth, iterative_deepening: true, zobrist_seed: Some(1) })
    }

    #[test]
    fn test_mate_in_one() {
        let mut eng = engine(2);
        let mv = eng.choose_move(Some("7k/5Q2/6K1/8/8/8/8/8 w - - 0 1")).unwrap();
        let new_board = eng.position().board().make_move_new(mv);
        assert_eq!(new_board.status(), crate::board::BoardStatus::Checkmate);
    }

    #[test]
    fn test_forced_move_is_returned() {
        let mut eng = engine(2);
        let mv = eng.choose_move(Some("8/8/8/8/8/6k1/8/R6K w - - 0 1"));
        assert!(mv.is_ok());
    }

    #[test]
    fn test_free_rook_capture_preferred() {
        let mut eng = engine(2);
        let mv = eng.choose_move(Some("4k3/8/8/8/8/8/8/R3r2K w - - 0 1")).unwrap();
        assert_eq!(mv.get_dest().to_string(), "e1");
    }

    #[test]
    fn test_transposition_hits_recorded() {
        let mut eng = engine(3);
        let _ = eng.choose_move(None).unwrap();
        assert!(eng.skips() > 0, "expected at least one transposition-table hit");
    }

    #[test]
    fn test_zobrist_unchanged_after_search() {
        let mut eng = engine(2);
        let before = eng.position().zobrist();
        let _ = eng.choose_move(None).unwrap();
        assert_eq!(eng.position().zobrist(), before);
    }
}

// Known, deliberately preserved quirks (see DESIGN.md):
// - fail-high/low returns the sentinel `±CUTOFF_SENTINEL` in place of the
//   true best_score/best_line; if a cutoff happens at the root this
//   corrupts the PV. A robust implementation would `break` the loop
//   instead and return the accumulated best_score/best_line.
// - the transposition table stores raw scores with no bound tag, so reuse
//   across different alpha-beta windows at the same depth can be unsound.
