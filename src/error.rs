//! Crate error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

pub type Result<T> = result::Result<T, Error>;

/// Caller-facing failure modes. Internal invariant violations are handled
/// separately (see `InvariantViolation`): in debug builds they log and
/// recompute, in release they resynchronise silently, matching the
/// "don't propagate corruption" rule.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// A position string did not parse as a legal FEN.
    InvalidFen,
    /// `choose_move` was called on a position with no legal moves.
    NoLegalMoves,
    /// `Bot::Human` was queried without a supplied move.
    MissingHumanMove,
    /// Incremental hash or material disagreed with a from-scratch rebuild.
    InvariantViolation,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidFen => "invalid fen",
            ErrorKind::NoLegalMoves => "no legal moves",
            ErrorKind::MissingHumanMove => "missing human move",
            ErrorKind::InvariantViolation => "invariant violation",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(kind) => write!(f, "{kind}"),
            Error::Message(kind, msg) => write!(f, "{kind}: {msg}"),
        }
    }
}

impl error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::Simple(kind)
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((kind, msg): (ErrorKind, S)) -> Self {
        Self::Message(kind, msg.to_string())
    }
}
