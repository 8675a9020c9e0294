//! Pattern syntax errors.

use std::ops::Range;

/// Error raised while compiling named-group pattern source.
///
/// Compilation is all-or-nothing: no partial pattern is ever produced.
/// Offsets are byte offsets into the pattern source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatternSyntaxError {
    /// A `(` was never closed.
    #[error("unterminated group opened at offset {offset}")]
    UnterminatedGroup { offset: usize },

    /// A `)` with no group to close.
    #[error("unopened group closed at offset {offset}")]
    UnopenedGroup { offset: usize },

    /// A `[` was never closed.
    #[error("unterminated character class opened at offset {offset}")]
    UnterminatedClass { offset: usize },

    /// Named-group introducer without a closing `>`, or with an empty name.
    #[error("malformed group name at offset {offset}")]
    MalformedGroupName { offset: usize },

    /// Group name contains a character outside `[A-Za-z0-9_]`, or starts with a digit.
    #[error("invalid character {ch:?} in group name at offset {offset}")]
    InvalidGroupNameCharacter { offset: usize, ch: char },
}

impl PatternSyntaxError {
    pub fn offset(&self) -> usize {
        match *self {
            Self::UnterminatedGroup { offset }
            | Self::UnopenedGroup { offset }
            | Self::UnterminatedClass { offset }
            | Self::MalformedGroupName { offset }
            | Self::InvalidGroupNameCharacter { offset, .. } => offset,
        }
    }

    /// Source range to highlight when rendering the error.
    pub fn span(&self) -> Range<usize> {
        let offset = self.offset();
        match self {
            Self::InvalidGroupNameCharacter { ch, .. } => offset..offset + ch.len_utf8(),
            _ => offset..offset + 1,
        }
    }
}
