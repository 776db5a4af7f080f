mod attacks;
mod bitboard;
#[allow(clippy::module_inception)]
mod board;
mod chessmove;
mod magic;
mod movegen;
mod piece;
mod square;
mod zobrist;

#[allow(unused_imports)]
pub use bitboard::{BitBoard, EMPTY};
#[allow(unused_imports)]
pub use board::{Board, BoardStatus};
pub use chessmove::ChessMove;
#[allow(unused_imports)]
pub use movegen::MoveGen;
pub use piece::{Color, Piece};
#[allow(unused_imports)]
pub use square::{File, Rank, Square, ALL_SQUARES};
pub use zobrist::ZobristTable;

/// Init attack tables (leaper/slider lookup tables). Must be called before
/// any board operations. Unlike Zobrist keys, these are fixed deterministic
/// tables shared across engine instances, not per-instance random state.
pub fn init() {
    attacks::init_attacks();
}
