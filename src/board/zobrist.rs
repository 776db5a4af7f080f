use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::piece::Color;

/// Per-engine-instance Zobrist key table.
///
/// Deliberately NOT a process-wide lazy static: two engines built with
/// different seeds disagree on key identity, which is correct, and tests can
/// pin a seed for reproducibility.
#[derive(Clone, Debug)]
pub struct ZobristTable {
    /// [color][piece_type][square]
    piece: [[[u64; 64]; 6]; 2],
    side: u64,
    /// four independent atoms, not a 16-entry whole-nibble table, so that a
    /// castling-rights change XORs exactly the bits that flipped
    castle_k: [u64; 2],
    castle_q: [u64; 2],
    ep: [u64; 8],
}

impl ZobristTable {
    /// Build a fresh table from an explicit seed.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut piece = [[[0u64; 64]; 6]; 2];
        for color_keys in &mut piece {
            for piece_keys in color_keys {
                for key in piece_keys {
                    *key = rng.random();
                }
            }
        }

        let side = rng.random();
        let castle_k = [rng.random(), rng.random()];
        let castle_q = [rng.random(), rng.random()];

        let mut ep = [0u64; 8];
        for key in &mut ep {
            *key = rng.random();
        }

        ZobristTable { piece, side, castle_k, castle_q, ep }
    }

    #[inline]
    pub fn piece_key(&self, piece: usize, color: usize, sq: usize) -> u64 {
        self.piece[color][piece][sq]
    }

    #[inline]
    pub fn side_key(&self) -> u64 {
        self.side
    }

    #[inline]
    pub fn castle_k_key(&self, color: Color) -> u64 {
        self.castle_k[color.to_index()]
    }

    #[inline]
    pub fn castle_q_key(&self, color: Color) -> u64 {
        self.castle_q[color.to_index()]
    }

    #[inline]
    pub fn ep_key(&self, file: usize) -> u64 {
        self.ep[file]
    }
}


// Each engine instance owns one table, built once at construction from an
// explicit seed and never mutated afterward. Position hash = XOR of all
// applicable keys; XOR is its own inverse, so `hash ^= key; hash ^= key;`
// restores the original value. Castling rights are four independent atoms
// (kingside/queenside per color) rather than one 16-entry table indexed by
// the whole nibble, so only the bits that actually flip get XORed on a move.
