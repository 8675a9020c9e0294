#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core value types shared by the regroup crates.
//!
//! - `GroupOccurrence`: one named-group occurrence in pattern source
//! - `Colors`: ANSI palette for pattern dumps

pub mod colors;


pub use colors::Colors;

/// One syntactic occurrence of a named group within pattern source.
///
/// A name declared in several alternation branches yields one occurrence per
/// branch. Ordering compares `group_index` first, then `source_offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct GroupOccurrence {
    group_index: usize,
    source_offset: usize,
}

impl GroupOccurrence {
    pub fn new(group_index: usize, source_offset: usize) -> Self {
        Self {
            group_index,
            source_offset,
        }
    }

    /// 1-based capture position assigned by the engine.
    #[inline]
    pub fn group_index(self) -> usize {
        self.group_index
    }

    /// Byte offset of the `(` that opens this group in the pattern source.
    #[inline]
    pub fn source_offset(self) -> usize {
        self.source_offset
    }
}

impl std::fmt::Display for GroupOccurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}@{}", self.group_index, self.source_offset)
    }
}
