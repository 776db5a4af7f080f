//! Top-level engine: owns the working position, the per-instance Zobrist
//! table, and all per-call search state, and exposes `choose_move`.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::{ChessMove, ZobristTable};
use crate::error::{Error, ErrorKind};
use crate::position::Position;
use crate::tt::TranspositionTable;
use crate::types::{DEFAULT_ZOBRIST_SEED, EngineConfig, Score, SearchResult};

pub struct Engine {
    pub(crate) position: Position,
    pub(crate) zt: ZobristTable,
    pub(crate) tt: TranspositionTable,
    /// Best principal variation from the most recently completed
    /// iterative-deepening pass; guides Move Ordering for the next one.
    pub(crate) pv: Vec<ChessMove>,
    /// Ply index expected to match `pv` during the in-flight search.
    pub(crate) best_line_probe_index: usize,
    /// Diagnostic count of transposition-table hits within the current
    /// `choose_move` call.
    pub(crate) skips: u64,
    /// Count of `negamax`/`quiescence` node visits within the current
    /// `choose_move` call.
    pub(crate) nodes: u64,
    pub(crate) rng: StdRng,
    pub(crate) config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let seed = config.zobrist_seed.unwrap_or(DEFAULT_ZOBRIST_SEED);
        let zt = ZobristTable::new(seed);
        let position = Position::new(&zt);
        let tt = TranspositionTable::new(config.max_depth);
        // A distinct seed derived from the same source, per §9's "or one
        // split from it" — keeps the move-ordering shuffle independent of
        // key identity while still reproducible from a single knob.
        let rng = StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);

        Engine {
            position,
            zt,
            tt,
            pv: Vec::new(),
            best_line_probe_index: 0,
            skips: 0,
            nodes: 0,
            rng,
            config,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn skips(&self) -> u64 {
        self.skips
    }

    pub fn zobrist_table(&self) -> &ZobristTable {
        &self.zt
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    /// Loads a new starting position from FEN, resynchronising the
    /// incremental key and material from scratch.
    pub fn set_position(&mut self, fen: &str) -> Result<(), Error> {
        self.position = Position::from_fen(fen, &self.zt)
            .map_err(|msg| Error::from((ErrorKind::InvalidFen, msg)))?;
        Ok(())
    }

    /// Searches from the current (or newly-loaded) position and returns the
    /// move it considers best.
    pub fn choose_move(&mut self, fen: Option<&str>) -> Result<ChessMove, Error> {
        self.choose_move_verbose(fen)?.best_move.ok_or_else(|| ErrorKind::InvariantViolation.into())
    }

    /// Like [`Engine::choose_move`], but returns the full [`SearchResult`]:
    /// the score and depth of the deepest completed iterative-deepening
    /// pass, and the total node count across every pass of this call.
    pub fn choose_move_verbose(&mut self, fen: Option<&str>) -> Result<SearchResult, Error> {
        if let Some(fen) = fen {
            self.set_position(fen)?;
        }

        if self.position.legal_moves().is_empty() {
            return Err(ErrorKind::NoLegalMoves.into());
        }

        self.pv.clear();
        self.skips = 0;
        self.nodes = 0;
        // Rebuild sized to the current max_depth rather than just clearing,
        // so a config change (e.g. Bot::MiniMax overriding depth) is safe.
        self.tt = TranspositionTable::new(self.config.max_depth);

        let depths: Vec<u8> = if self.config.iterative_deepening && self.config.max_depth >= 2 {
            (2..=self.config.max_depth).collect()
        } else {
            vec![self.config.max_depth.max(1)]
        };

        let turn_sign: Score = if self.position.turn() == crate::board::Color::White { 1.0 } else { -1.0 };

        let mut last_line = Vec::new();
        let mut last_score = Score::NEG_INFINITY * turn_sign;
        let mut last_depth = 0u8;
        for depth in depths {
            self.tt.clear();
            // Belt-and-braces: recompute material from scratch before each pass.
            self.position.resync_material();

            let (score, line) = self.negamax(depth, turn_sign, Score::NEG_INFINITY, Score::INFINITY);
            if !line.is_empty() {
                last_line = line;
                last_score = score;
                last_depth = depth;
            }
            self.pv = last_line.clone();
        }

        Ok(SearchResult {
            best_move: self.pv.first().copied(),
            score: last_score,
            depth: last_depth,
            nodes: self.nodes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EngineConfig;

    #[test]
    fn test_verbose_result_matches_choose_move() {
        crate::board::init();
        let mut eng = Engine::new(EngineConfig { max_depth: 2, iterative_deepening: true, zobrist_seed: Some(5) });
        let result = eng.choose_move_verbose(Some("7k/5Q2/6K1/8/8/8/8/8 w - - 0 1")).unwrap();
        assert!(result.best_move.is_some());
        assert_eq!(result.depth, 2);
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_verbose_result_reports_mate_score() {
        crate::board::init();
        let mut eng = Engine::new(EngineConfig { max_depth: 2, iterative_deepening: true, zobrist_seed: Some(5) });
        let result = eng.choose_move_verbose(Some("7k/5Q2/6K1/8/8/8/8/8 w - - 0 1")).unwrap();
        assert!(result.score > 9_000.0, "expected a White mate score, got {}", result.score);
    }
}
