//! Prefix matching of typed character classes against the pattern table.
//!
//! Matching is purely positional: only the class of each typed character is
//! compared, never the character itself.

use crate::class::{CharacterClass, ClassSet};
use crate::pattern::PatternTable;
use std::sync::Arc;
use tracing::trace;

/// Result of matching a class prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Indices into the pattern table of every shape consistent with the prefix.
    pub surviving: Vec<usize>,
    /// Classes demanded at the slot right after the prefix.
    pub next_classes: ClassSet,
    /// Outward code length, when every surviving shape agrees on it.
    pub outward_len: Option<usize>,
}

impl MatchResult {
    fn unconstrained() -> Self {
        Self {
            surviving: Vec::new(),
            next_classes: ClassSet::empty(),
            outward_len: None,
        }
    }

    /// No shape survives, so the prefix imposes no constraint at all.
    pub fn is_unconstrained(&self) -> bool {
        self.surviving.is_empty()
    }
}

/// Matches typed prefixes against a shared [`PatternTable`].
#[derive(Debug, Clone)]
pub struct FormatMatcher {
    table: Arc<PatternTable>,
}

impl FormatMatcher {
    pub fn new(table: Arc<PatternTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Match a class prefix against every shape.
    pub fn match_prefix(&self, prefix: &[CharacterClass]) -> MatchResult {
        self.match_with_outward(prefix, None)
    }

    /// Match a class prefix, optionally requiring a fixed outward length.
    ///
    /// The outward length is known once a separator has been typed: the
    /// number of non-space characters before the space.
    pub fn match_with_outward(
        &self,
        prefix: &[CharacterClass],
        outward_len: Option<usize>,
    ) -> MatchResult {
        let surviving: Vec<usize> = self
            .table
            .shapes()
            .iter()
            .enumerate()
            .filter(|(_, shape)| shape.matches_prefix(prefix))
            .filter(|(_, shape)| outward_len.map_or(true, |len| shape.outward_len() == len))
            .map(|(index, _)| index)
            .collect();

        if surviving.is_empty() {
            trace!(prefix_len = prefix.len(), "no shape matches prefix");
            return MatchResult::unconstrained();
        }

        let shapes = self.table.shapes();
        let next_classes = surviving
            .iter()
            .filter_map(|&i| shapes[i].slot(prefix.len()))
            .collect();

        let first = shapes[surviving[0]].outward_len();
        let agreed = surviving
            .iter()
            .all(|&i| shapes[i].outward_len() == first)
            .then_some(first);

        trace!(
            prefix_len = prefix.len(),
            surviving = surviving.len(),
            ?next_classes,
            "matched prefix"
        );

        MatchResult {
            surviving,
            next_classes,
            outward_len: agreed,
        }
    }
}
