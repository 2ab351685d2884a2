//! Error types raised while parsing `du` output.
//!
//! Parsing stops at the first bad line. Every error carries the 1-based line
//! number and the offending fragment of input so the caller can point the
//! user at the exact spot.

use thiserror::Error;

use crate::parser::MAX_DEPTH;

/// Broad category of a [`ParseError`].
///
/// Malformed lines, unparsable sizes and over-deep paths are all
/// [`ParseErrorKind::Format`]; a path whose size appears twice is
/// [`ParseErrorKind::DuplicateEntry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line does not look like `<size> <path>`.
    Format,

    /// The same path was given a size more than once.
    DuplicateEntry,
}

/// An error produced by [`crate::parser::parse_du`].
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The line could not be split into a size token and a path.
    #[error("line {line}: could not parse {content:?}")]
    Format { line: usize, content: String },

    /// The size token is not a non-negative integer.
    #[error("line {line}: size is not a number: {token:?}")]
    InvalidSize { line: usize, token: String },

    /// The path has more segments than [`crate::parser::MAX_DEPTH`].
    #[error("line {line}: path is {depth} levels deep, limit is {max}", max = MAX_DEPTH)]
    TooDeep { line: usize, depth: usize },

    /// The path already had a size assigned by an earlier line.
    #[error("line {line}: size of {path} was already specified previously")]
    DuplicateEntry { line: usize, path: String },
}

impl ParseError {
    /// The category of this error.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        match self {
            Self::Format { .. } | Self::InvalidSize { .. } | Self::TooDeep { .. } => {
                ParseErrorKind::Format
            }
            Self::DuplicateEntry { .. } => ParseErrorKind::DuplicateEntry,
        }
    }

    /// The 1-based input line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Format { line, .. }
            | Self::InvalidSize { line, .. }
            | Self::TooDeep { line, .. }
            | Self::DuplicateEntry { line, .. } => *line,
        }
    }
}
