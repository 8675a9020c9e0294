//! Compiled named pattern bundled with its `regex-automata` engine.

use regex_automata::meta::{CapturesMatches, Regex};
use regroup_compiler::{NamedPattern, PatternSyntaxError};

use crate::named_match::NamedMatch;
use crate::positional::EngineMatch;

/// Errors building a [`NamedRegex`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Syntax(#[from] PatternSyntaxError),

    /// The engine rejected the native pattern (native pattern, engine message).
    #[error("engine rejected pattern {0:?}: {1}")]
    EngineRejected(String, String),

    /// The engine numbered the groups differently than the compiler did.
    #[error("engine reports {actual} capture groups, compiler counted {expected}")]
    GroupCountMismatch { expected: usize, actual: usize },
}

/// A named-group pattern ready to match.
///
/// Immutable and `Sync`: share one instance across threads. Every match
/// attempt gets its own captures.
#[derive(Clone, Debug)]
pub struct NamedRegex {
    pattern: NamedPattern,
    regex: Regex,
}

impl NamedRegex {
    pub fn new(source: &str) -> Result<Self, BuildError> {
        Self::from_pattern(NamedPattern::compile(source)?)
    }

    pub fn from_pattern(pattern: NamedPattern) -> Result<Self, BuildError> {
        let native = pattern.native_pattern();
        let regex = Regex::new(native)
            .map_err(|e| BuildError::EngineRejected(native.to_string(), e.to_string()))?;

        // captures_len includes the implicit group 0
        let actual = regex.captures_len().saturating_sub(1);
        if actual != pattern.group_count() {
            return Err(BuildError::GroupCountMismatch {
                expected: pattern.group_count(),
                actual,
            });
        }

        Ok(Self { pattern, regex })
    }

    pub fn pattern(&self) -> &NamedPattern {
        &self.pattern
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// Leftmost-first match in `haystack`, viewable by name.
    pub fn captures<'h>(&self, haystack: &'h str) -> Option<NamedMatch<'_, EngineMatch<'h>>> {
        let mut caps = self.regex.create_captures();
        self.regex.captures(haystack, &mut caps);
        if !caps.is_match() {
            return None;
        }
        Some(NamedMatch::new(&self.pattern, EngineMatch::new(caps, haystack)))
    }

    /// All successive non-overlapping matches in `haystack`.
    pub fn captures_iter<'r, 'h>(&'r self, haystack: &'h str) -> CapturesIter<'r, 'h> {
        CapturesIter {
            pattern: &self.pattern,
            inner: self.regex.captures_iter(haystack),
            haystack,
        }
    }
}

/// Iterator over named matches, see [`NamedRegex::captures_iter`].
pub struct CapturesIter<'r, 'h> {
    pattern: &'r NamedPattern,
    inner: CapturesMatches<'r, 'h>,
    haystack: &'h str,
}

impl<'r, 'h> Iterator for CapturesIter<'r, 'h> {
    type Item = NamedMatch<'r, EngineMatch<'h>>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.inner.next()?;
        Some(NamedMatch::new(
            self.pattern,
            EngineMatch::new(caps, self.haystack),
        ))
    }
}
