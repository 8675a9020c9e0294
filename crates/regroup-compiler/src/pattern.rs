//! Compiled named-group pattern.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use regroup_core::GroupOccurrence;

use crate::error::PatternSyntaxError;
use crate::scanner::Scanner;

/// Immutable result of compiling named-group pattern source.
///
/// Holds the engine-native rewrite of the source and an index from each group
/// name to its occurrences. Names iterate in first-declaration order. A name
/// maps to more than one occurrence only when it is declared in several
/// alternation branches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedPattern {
    source: String,
    native: String,
    groups: IndexMap<String, Vec<GroupOccurrence>>,
    group_count: usize,
}

impl NamedPattern {
    /// Compile pattern source in a single scan.
    pub fn compile(source: &str) -> Result<Self, PatternSyntaxError> {
        let scan = Scanner::new(source).run()?;
        log::debug!(
            "compiled {:?}: {} groups, {} names, native {:?}",
            source,
            scan.group_count,
            scan.groups.len(),
            scan.native
        );
        Ok(Self {
            source: source.to_owned(),
            native: scan.native,
            groups: scan.groups,
            group_count: scan.group_count,
        })
    }

    /// The pattern as written, including named-group syntax.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The pattern with every named group rewritten to a plain capturing group.
    pub fn native_pattern(&self) -> &str {
        &self.native
    }

    /// Number of capturing groups, not counting the implicit group 0.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Distinct group names in first-declaration order.
    pub fn group_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.groups.keys().map(String::as_str)
    }

    pub fn occurrences_by_name(&self) -> &IndexMap<String, Vec<GroupOccurrence>> {
        &self.groups
    }

    /// Occurrences of `name` in source order, or `None` if it was never declared.
    pub fn occurrences(&self, name: &str) -> Option<&[GroupOccurrence]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Group index of the first occurrence of `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index_of_instance(name, 0)
    }

    /// Group index of the `instance`-th occurrence (0-based) of `name`.
    pub fn index_of_instance(&self, name: &str, instance: usize) -> Option<usize> {
        self.occurrences(name)?
            .get(instance)
            .map(|occ| occ.group_index())
    }
}

impl FromStr for NamedPattern {
    type Err = PatternSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl fmt::Display for NamedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
