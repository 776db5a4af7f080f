//! In-process capability abstraction standing in for the external
//! tournament harness's polymorphic "anything answering `choose_move`"
//! contract (UCI/XBoard conformance is an explicit non-goal, so this is a
//! closed tagged variant rather than a wire protocol or an open trait
//! hierarchy — see DESIGN.md).

use rand::Rng;
use rand::rngs::StdRng;

use crate::board::ChessMove;
use crate::engine::Engine;
use crate::error::{Error, ErrorKind};
use crate::position::{piece_value, Position};

pub enum Bot {
    /// Picks uniformly among the legal moves.
    Random { rng: StdRng },
    /// Defers to a caller-supplied move; cannot choose on its own.
    Human,
    /// A search engine bounded to a fixed depth, ignoring its own config.
    MiniMax { engine: Engine, depth: u8 },
    /// One-ply greedy: best immediate material swing, no search.
    PieceValue,
    /// The full iterative-deepening negamax core.
    Engine(Engine),
}

impl Bot {
    /// Chooses a move for `position`. `human_move`, when supplied, is only
    /// consulted by `Bot::Human`; other variants ignore it.
    pub fn choose_move(
        &mut self,
        position: &Position,
        human_move: Option<ChessMove>,
    ) -> Result<ChessMove, Error> {
        match self {
            Bot::Random { rng } => {
                let moves = position.legal_moves();
                if moves.is_empty() {
                    return Err(ErrorKind::NoLegalMoves.into());
                }
                let idx = rng.random_range(0..moves.len());
                Ok(moves[idx])
            }
            Bot::Human => human_move.ok_or_else(|| ErrorKind::MissingHumanMove.into()),
            Bot::MiniMax { engine, depth } => {
                engine.set_position(&position.fen())?;
                engine.config_mut().max_depth = *depth;
                engine.choose_move(None)
            }
            Bot::PieceValue => greedy_move(position),
            Bot::Engine(engine) => {
                engine.set_position(&position.fen())?;
                engine.choose_move(None)
            }
        }
    }
}

/// One-ply greedy evaluation: the move with the best immediate material
/// swing for the side to move, no search at all.
fn greedy_move(position: &Position) -> Result<ChessMove, Error> {
    let moves = position.legal_moves();
    if moves.is_empty() {
        return Err(ErrorKind::NoLegalMoves.into());
    }

    let mut best_move = moves[0];
    let mut best_swing = f64::NEG_INFINITY;

    for mv in moves {
        let swing = match position.piece_at(mv.get_dest()) {
            Some((_, victim)) => piece_value(victim),
            None => 0.0,
        };
        if swing > best_swing {
            best_swing = swing;
            best_move = mv;
        }
    }

    Ok(best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ZobristTable;
    use crate::types::EngineConfig;
    use rand::SeedableRng;

    fn zt() -> ZobristTable {
        crate::board::init();
        ZobristTable::new(3)
    }

    #[test]
    fn test_random_bot_returns_legal_move() {
        let zt = zt();
        let pos = Position::new(&zt);
        let mut bot = Bot::Random { rng: StdRng::seed_from_u64(9) };
        let mv = bot.choose_move(&pos, None).unwrap();
        assert!(pos.is_legal(mv));
    }

    #[test]
    fn test_human_bot_requires_move() {
        let zt = zt();
        let pos = Position::new(&zt);
        let mut bot = Bot::Human;
        assert!(bot.choose_move(&pos, None).is_err());
    }

    #[test]
    fn test_human_bot_returns_supplied_move() {
        let zt = zt();
        let pos = Position::new(&zt);
        let supplied = pos.legal_moves()[0];
        let mut bot = Bot::Human;
        let mv = bot.choose_move(&pos, Some(supplied)).unwrap();
        assert_eq!(mv, supplied);
    }

    #[test]
    fn test_piece_value_bot_prefers_capture() {
        let zt = zt();
        let fen = "4k3/8/8/8/8/8/8/R3r2K w - - 0 1";
        let pos = Position::from_fen(fen, &zt).unwrap();
        let mut bot = Bot::PieceValue;
        let mv = bot.choose_move(&pos, None).unwrap();
        assert_eq!(mv.get_dest().to_string(), "e1");
    }

    #[test]
    fn test_engine_bot_returns_legal_move() {
        let zt = zt();
        let pos = Position::new(&zt);
        let mut bot =
            Bot::Engine(Engine::new(EngineConfig { max_depth: 2, iterative_deepening: true, zobrist_seed: Some(3) }));
        let mv = bot.choose_move(&pos, None).unwrap();
        assert!(pos.is_legal(mv));
    }
}
