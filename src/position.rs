//! The working position: a [`Board`] paired with an incrementally-maintained
//! Zobrist key and material balance. Fuses the "Position Adapter" and
//! "Incremental Hasher" roles into one type, since both are just different
//! views onto the same make/unmake discipline.

use crate::board::{Board, BoardStatus, ChessMove, Color, MoveGen, Piece, Square, ZobristTable};

/// Conventional material values, White-positive usage is the caller's job
/// (this returns the unsigned per-piece value).
pub fn piece_value(piece: Piece) -> f64 {
    match piece {
        Piece::Pawn => 1.0,
        Piece::Knight => 3.0,
        Piece::Bishop => 3.0,
        Piece::Rook => 5.0,
        Piece::Queen => 9.0,
        Piece::King => 0.0,
    }
}

fn signed(color: Color, value: f64) -> f64 {
    match color {
        Color::White => value,
        Color::Black => -value,
    }
}

/// Result of the game, if it has ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
}

/// Snapshot returned by [`Position::push`]/[`Position::push_null`], handed
/// back to the matching `pop` to restore prior state in one assignment
/// rather than re-deriving it from an unmake record.
#[derive(Clone, Copy)]
pub struct Unmake {
    board: Board,
    zobrist: u64,
    material: f64,
}

#[derive(Clone, Copy)]
pub struct Position {
    board: Board,
    zobrist: u64,
    material: f64,
}

impl Position {
    /// Standard starting position.
    pub fn new(zt: &ZobristTable) -> Self {
        Self::from_board(Board::default(), zt)
    }

    pub fn from_fen(fen: &str, zt: &ZobristTable) -> Result<Self, String> {
        Board::from_fen(fen).map(|board| Self::from_board(board, zt))
    }

    fn from_board(board: Board, zt: &ZobristTable) -> Self {
        let mut pos = Position { board, zobrist: 0, material: 0.0 };
        pos.zobrist = pos.full_key(zt);
        pos.material = pos.compute_material();
        pos
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    pub fn zobrist(&self) -> u64 {
        self.zobrist
    }

    pub fn material(&self) -> f64 {
        self.material
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Rebuilds the Zobrist key from scratch. Used at construction, on FEN
    /// load, as the fallback for castling/en-passant moves, and to
    /// cross-check the incremental key in debug builds.
    pub fn full_key(&self, zt: &ZobristTable) -> u64 {
        let b = &self.board;
        let mut key = 0u64;

        for (sq, color, piece) in b.piece_map() {
            key ^= zt.piece_key(piece.to_index(), color.to_index(), sq.to_index());
        }

        if b.side_to_move() == Color::Black {
            key ^= zt.side_key();
        }

        if b.has_kingside_rights(Color::White) {
            key ^= zt.castle_k_key(Color::White);
        }
        if b.has_kingside_rights(Color::Black) {
            key ^= zt.castle_k_key(Color::Black);
        }
        if b.has_queenside_rights(Color::White) {
            key ^= zt.castle_q_key(Color::White);
        }
        if b.has_queenside_rights(Color::Black) {
            key ^= zt.castle_q_key(Color::Black);
        }

        if let Some(ep) = b.en_passant() {
            key ^= zt.ep_key(ep.file().to_index());
        }

        key
    }

    /// Recomputes material from scratch: used for cross-checks and the
    /// belt-and-braces recompute at the top of each iterative-deepening pass.
    pub fn compute_material(&self) -> f64 {
        self.board
            .piece_map()
            .map(|(_, color, piece)| signed(color, piece_value(piece)))
            .sum()
    }

    /// Recomputes and overwrites `material` from scratch. Used as the
    /// belt-and-braces resync at the top of each iterative-deepening pass.
    pub fn resync_material(&mut self) {
        self.material = self.compute_material();
    }

    pub fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    pub fn is_legal(&self, mv: ChessMove) -> bool {
        self.board.legal(mv)
    }

    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_on(sq).map(|p| (self.board.color_on(sq).unwrap(), p))
    }

    pub fn is_capture(&self, mv: ChessMove) -> bool {
        self.board.is_capture(mv)
    }

    pub fn is_castling(&self, mv: ChessMove) -> bool {
        self.board.is_castling(mv)
    }

    pub fn is_en_passant(&self, mv: ChessMove) -> bool {
        self.board.is_en_passant(mv)
    }

    pub fn has_kingside_castling_rights(&self, color: Color) -> bool {
        self.board.has_kingside_rights(color)
    }

    pub fn has_queenside_castling_rights(&self, color: Color) -> bool {
        self.board.has_queenside_rights(color)
    }

    pub fn ep_square(&self) -> Option<Square> {
        self.board.en_passant()
    }

    pub fn turn(&self) -> Color {
        self.board.side_to_move()
    }

    pub fn piece_map(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.board.piece_map()
    }

    /// `None` while the game is ongoing.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.board.status() {
            BoardStatus::Ongoing => None,
            BoardStatus::Stalemate => Some(Outcome::Draw),
            BoardStatus::Checkmate => {
                // side to move is checkmated, so the other side won
                Some(match self.board.side_to_move() {
                    Color::White => Outcome::BlackWins,
                    Color::Black => Outcome::WhiteWins,
                })
            }
        }
    }

    /// Applies `mv`, updating `zobrist`/`material` incrementally where
    /// possible. Returns a snapshot for [`Position::pop`].
    ///
    /// Castling and en-passant moves fall back to a full rebuild after the
    /// push — correct but slower, and rare enough not to matter.
    pub fn push(&mut self, mv: ChessMove, zt: &ZobristTable) -> Unmake {
        let unmake = Unmake { board: self.board, zobrist: self.zobrist, material: self.material };

        if self.board.is_castling(mv) || self.board.is_en_passant(mv) {
            self.board = self.board.make_move_new(mv);
            self.zobrist = self.full_key(zt);
            self.material = self.compute_material();
            return unmake;
        }

        let us = self.board.side_to_move();
        let src = mv.get_source();
        let dst = mv.get_dest();

        let moving = self.board.piece_on(src).expect("no piece on source square");
        let captured = self.board.piece_on(dst);

        // 1. XOR out the moving piece at its origin.
        self.zobrist ^= zt.piece_key(moving.to_index(), us.to_index(), src.to_index());

        // 2. XOR out a captured piece and adjust material.
        if let Some(cap) = captured {
            let them = !us;
            self.zobrist ^= zt.piece_key(cap.to_index(), them.to_index(), dst.to_index());
            self.material -= signed(them, piece_value(cap));
        }

        // 3. Promotion material adjustment.
        let placed = mv.get_promotion().unwrap_or(moving);
        if let Some(promo) = mv.get_promotion() {
            self.material += signed(us, piece_value(promo) - piece_value(Piece::Pawn));
        }

        // 4. XOR in the moving (or promoted) piece at the destination.
        self.zobrist ^= zt.piece_key(placed.to_index(), us.to_index(), dst.to_index());

        // 5. Side to move.
        self.zobrist ^= zt.side_key();

        // 6. Clear the previous ep-file atom.
        if let Some(ep) = self.board.en_passant() {
            self.zobrist ^= zt.ep_key(ep.file().to_index());
        }

        // 7. Snapshot castling flags before push.
        let old_castle = [
            self.board.has_kingside_rights(Color::White),
            self.board.has_kingside_rights(Color::Black),
            self.board.has_queenside_rights(Color::White),
            self.board.has_queenside_rights(Color::Black),
        ];

        // 8. Push the move structurally.
        self.board = self.board.make_move_new(mv);

        // 9. New ep-file atom.
        if let Some(ep) = self.board.en_passant() {
            self.zobrist ^= zt.ep_key(ep.file().to_index());
        }

        // 10. XOR every castling atom that changed.
        let new_castle = [
            self.board.has_kingside_rights(Color::White),
            self.board.has_kingside_rights(Color::Black),
            self.board.has_queenside_rights(Color::White),
            self.board.has_queenside_rights(Color::Black),
        ];
        if old_castle[0] != new_castle[0] {
            self.zobrist ^= zt.castle_k_key(Color::White);
        }
        if old_castle[1] != new_castle[1] {
            self.zobrist ^= zt.castle_k_key(Color::Black);
        }
        if old_castle[2] != new_castle[2] {
            self.zobrist ^= zt.castle_q_key(Color::White);
        }
        if old_castle[3] != new_castle[3] {
            self.zobrist ^= zt.castle_q_key(Color::Black);
        }

        if cfg!(debug_assertions) {
            let expected_key = self.full_key(zt);
            let expected_material = self.compute_material();
            if expected_key != self.zobrist || (expected_material - self.material).abs() > 1e-9 {
                log::warn!(
                    "incremental state diverged from rebuild: key {} vs {}, material {} vs {}",
                    self.zobrist,
                    expected_key,
                    self.material,
                    expected_material
                );
                self.zobrist = expected_key;
                self.material = expected_material;
            }
        }

        unmake
    }

    /// Restores the position to exactly what it was before `push`. Because
    /// `Board` is `Copy`, this is a trivial snapshot-restore rather than an
    /// inverse-XOR walk.
    pub fn pop(&mut self, unmake: Unmake) {
        self.board = unmake.board;
        self.zobrist = unmake.zobrist;
        self.material = unmake.material;
    }

    /// Null move for the Evaluator's mobility-differential term: flips the
    /// side to move without changing material, `None` if the side to move
    /// is in check (a null move would be illegal).
    pub fn push_null(&mut self, zt: &ZobristTable) -> Option<Unmake> {
        let unmake = Unmake { board: self.board, zobrist: self.zobrist, material: self.material };
        let next = self.board.null_move()?;
        self.board = next;
        self.zobrist = self.full_key(zt);
        Some(unmake)
    }

    pub fn pop_null(&mut self, unmake: Unmake) {
        self.board = unmake.board;
        self.zobrist = unmake.zobrist;
        self.material = unmake.material;
    }
}
