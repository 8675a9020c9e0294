//! Positional match capability.
//!
//! `PositionalMatch` is the query surface of a regex engine that numbers its
//! capture groups: group 0 is the whole match, groups 1.. follow the order of
//! their opening parentheses. A group that did not participate has no span.

use std::ops::Range;

use regex_automata::util::captures::Captures;

/// Read-only positional view of one match attempt.
pub trait PositionalMatch {
    /// Number of groups including group 0, or 0 if the attempt did not match.
    fn group_len(&self) -> usize;

    /// Byte range of group `index`, or `None` if it did not participate.
    fn span_at(&self, index: usize) -> Option<Range<usize>>;

    /// The text the match was run against.
    fn haystack(&self) -> &str;

    fn group_at(&self, index: usize) -> Option<&str> {
        self.span_at(index)
            .and_then(|range| self.haystack().get(range))
    }

    fn start_at(&self, index: usize) -> Option<usize> {
        self.span_at(index).map(|range| range.start)
    }

    fn end_at(&self, index: usize) -> Option<usize> {
        self.span_at(index).map(|range| range.end)
    }
}

impl<T: PositionalMatch + ?Sized> PositionalMatch for &T {
    fn group_len(&self) -> usize {
        (*self).group_len()
    }
    fn span_at(&self, index: usize) -> Option<Range<usize>> {
        (*self).span_at(index)
    }
    fn haystack(&self) -> &str {
        (*self).haystack()
    }
}

/// `regex-automata` captures paired with the haystack they refer to.
#[derive(Clone, Debug)]
pub struct EngineMatch<'h> {
    caps: Captures,
    haystack: &'h str,
}

impl<'h> EngineMatch<'h> {
    pub fn new(caps: Captures, haystack: &'h str) -> Self {
        Self { caps, haystack }
    }

    pub fn captures(&self) -> &Captures {
        &self.caps
    }

    pub fn is_match(&self) -> bool {
        self.caps.is_match()
    }
}

impl PositionalMatch for EngineMatch<'_> {
    fn group_len(&self) -> usize {
        self.caps.group_len()
    }

    fn span_at(&self, index: usize) -> Option<Range<usize>> {
        self.caps.get_group(index).map(|span| span.range())
    }

    fn haystack(&self) -> &str {
        self.haystack
    }
}

/// Positional match built from explicit spans.
///
/// Lets a result from any engine be viewed by name, as long as the spans are
/// numbered the same way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedMatch<'h> {
    spans: Vec<Option<Range<usize>>>,
    haystack: &'h str,
}

impl<'h> RecordedMatch<'h> {
    /// `spans[0]` is the whole match; an empty vector means no match.
    pub fn new(haystack: &'h str, spans: Vec<Option<Range<usize>>>) -> Self {
        Self { spans, haystack }
    }
}

impl PositionalMatch for RecordedMatch<'_> {
    fn group_len(&self) -> usize {
        self.spans.len()
    }

    fn span_at(&self, index: usize) -> Option<Range<usize>> {
        self.spans.get(index).cloned().flatten()
    }

    fn haystack(&self) -> &str {
        self.haystack
    }
}
