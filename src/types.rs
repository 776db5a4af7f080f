use crate::board::ChessMove;

/// Evaluation score. The reference design works in small floating-point
/// units (material in whole pieces, piece-square and mobility terms
/// dampened by division), so this stays `f64` rather than a centipawn
/// integer — converting to centipawns would just reintroduce a scale
/// factor the design never asked for.
pub type Score = f64;

/// Outcome scores, White-positive. Remaining depth is added so the search
/// prefers the shortest mate and defers the longest loss.
pub const MATE_BASE: Score = 10_000.0;
pub const DRAW_SCORE: Score = 0.0;

/// Fail-high/low sentinel magnitude (see search::negamax). Large enough to
/// dominate any real evaluation or mate score.
pub const CUTOFF_SENTINEL: Score = 1_000_000.0;

pub const DEFAULT_MAX_DEPTH: u8 = 5;
pub const DEFAULT_ZOBRIST_SEED: u64 = 0x5EED_C0FF_EE15_BA5E;

/// Construction-time knobs for an [`crate::engine::Engine`]. Purely an
/// in-process argument — no config file or environment variable is ever
/// read, matching the "no persisted state" rule.
pub struct EngineConfig {
    pub max_depth: u8,
    pub iterative_deepening: bool,
    /// `None` uses [`DEFAULT_ZOBRIST_SEED`]; tests pin an explicit value.
    pub zobrist_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            iterative_deepening: true,
            zobrist_seed: None,
        }
    }
}

/// Full detail behind a [`crate::engine::Engine::choose_move_verbose`] call:
/// the move `choose_move` would return, the score and depth of the
/// deepest completed iterative-deepening pass, and the node count over the
/// whole call (every `negamax`/`quiescence` invocation, across all passes).
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    pub score: Score,
    pub depth: u8,
    pub nodes: u64,
}
