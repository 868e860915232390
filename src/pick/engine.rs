//! Authoritative pick selection with no-repeat bookkeeping.

use std::collections::HashSet;

use crate::error::{PickError, PickResult};

use super::entropy::Entropy;
use super::history::{History, HistoryEntry};

/// Tracks which items have been drawn since the last reset.
///
/// Exclusion is keyed by the item string, so duplicate lines in the input
/// share a single "already picked" flag.
#[derive(Debug, Clone, Default)]
pub struct PickEngine {
    picked: HashSet<String>,
    history: History,
}

impl PickEngine {
    pub fn new() -> Self {
        Self {
            picked: HashSet::new(),
            history: History::new(),
        }
    }

    /// Candidates that have not been picked yet, in input order.
    pub fn available(&self, candidates: &[String]) -> Vec<String> {
        candidates
            .iter()
            .filter(|item| !self.picked.contains(*item))
            .cloned()
            .collect()
    }

    /// Number of candidates still available.
    pub fn available_count(&self, candidates: &[String]) -> usize {
        candidates
            .iter()
            .filter(|item| !self.picked.contains(*item))
            .count()
    }

    /// Draw one available candidate and record it.
    ///
    /// On failure nothing is recorded.
    pub fn pick<E: Entropy + ?Sized>(
        &mut self,
        candidates: &[String],
        rng: &mut E,
    ) -> PickResult<String> {
        if candidates.is_empty() {
            return Err(PickError::EmptyInput);
        }

        let available = self.available(candidates);
        if available.is_empty() {
            return Err(PickError::AllPicked);
        }

        let item = available[rng.index(available.len())].clone();
        self.picked.insert(item.clone());
        self.history.record(HistoryEntry::new(item.clone()));
        Ok(item)
    }

    pub fn is_picked(&self, item: &str) -> bool {
        self.picked.contains(item)
    }

    pub fn picked_count(&self) -> usize {
        self.picked.len()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Forget all picks and history.
    pub fn reset(&mut self) {
        self.picked.clear();
        self.history.clear();
    }
}
