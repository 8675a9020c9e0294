//! Name-aware view over a positional match.

use std::collections::HashMap;
use std::ops::Range;

use regroup_compiler::NamedPattern;
use regroup_core::GroupOccurrence;

use crate::positional::PositionalMatch;

/// Error for name-based queries.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// The name is not declared anywhere in the pattern.
    #[error("unknown group name {name:?}")]
    UnknownGroupName { name: String },
}

/// Read-only view of one match attempt, queryable by group name or index.
///
/// Borrows the compiled pattern and owns the positional handle. A name declared
/// in several alternation branches resolves to the first occurrence, in source
/// order, that took part in the match. A declared name whose group did not
/// participate yields `Ok(None)`; an undeclared name is an error.
#[derive(Clone, Debug)]
pub struct NamedMatch<'p, M> {
    pattern: &'p NamedPattern,
    positional: M,
}

impl<'p, M: PositionalMatch> NamedMatch<'p, M> {
    pub fn new(pattern: &'p NamedPattern, positional: M) -> Self {
        Self {
            pattern,
            positional,
        }
    }

    pub fn pattern(&self) -> &'p NamedPattern {
        self.pattern
    }

    pub fn positional(&self) -> &M {
        &self.positional
    }

    pub fn into_positional(self) -> M {
        self.positional
    }

    /// Group index `name` resolved to for this match, if any occurrence participated.
    pub fn index_of(&self, name: &str) -> Result<Option<usize>, MatchError> {
        let occurrences = self
            .pattern
            .occurrences(name)
            .ok_or_else(|| MatchError::UnknownGroupName {
                name: name.to_owned(),
            })?;
        Ok(self.first_participating(occurrences))
    }

    pub fn span(&self, name: &str) -> Result<Option<Range<usize>>, MatchError> {
        Ok(self
            .index_of(name)?
            .and_then(|index| self.positional.span_at(index)))
    }

    /// Text captured by `name`.
    pub fn group(&self, name: &str) -> Result<Option<&str>, MatchError> {
        Ok(self
            .index_of(name)?
            .and_then(|index| self.positional.group_at(index)))
    }

    /// Start offset of the text captured by `name`.
    pub fn start(&self, name: &str) -> Result<Option<usize>, MatchError> {
        Ok(self.span(name)?.map(|range| range.start))
    }

    /// Offset just past the text captured by `name`.
    pub fn end(&self, name: &str) -> Result<Option<usize>, MatchError> {
        Ok(self.span(name)?.map(|range| range.end))
    }

    /// Every declared name with its captured text, in declaration order.
    pub fn ordered_groups(&self) -> Vec<(&'p str, Option<&str>)> {
        self.resolved().collect()
    }

    /// Every declared name with its captured text.
    pub fn named_groups(&self) -> HashMap<&'p str, Option<&str>> {
        self.resolved().collect()
    }

    fn resolved(&self) -> impl Iterator<Item = (&'p str, Option<&str>)> + '_ {
        self.pattern
            .occurrences_by_name()
            .iter()
            .map(move |(name, occurrences)| {
                let text = self
                    .first_participating(occurrences)
                    .and_then(|index| self.positional.group_at(index));
                (name.as_str(), text)
            })
    }

    fn first_participating(&self, occurrences: &[GroupOccurrence]) -> Option<usize> {
        let index = occurrences
            .iter()
            .map(|occ| occ.group_index())
            .find(|&index| self.positional.span_at(index).is_some());
        if occurrences.len() > 1 {
            log::trace!("duplicate name resolved to group {index:?} of {occurrences:?}");
        }
        index
    }
}

impl<M: PositionalMatch> PositionalMatch for NamedMatch<'_, M> {
    fn group_len(&self) -> usize {
        self.positional.group_len()
    }

    fn span_at(&self, index: usize) -> Option<Range<usize>> {
        self.positional.span_at(index)
    }

    fn haystack(&self) -> &str {
        self.positional.haystack()
    }
}
