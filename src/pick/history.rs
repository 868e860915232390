use chrono::{DateTime, Local};

/// One completed pick.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub item: String,
    pub timestamp: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(item: String) -> Self {
        Self {
            item,
            timestamp: Local::now(),
        }
    }

    /// Wall-clock time of the pick, e.g. `14:03:59`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Session pick log, most recent first.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries paired with their display number (`#N` for the newest, down to `#1`).
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &HistoryEntry)> {
        let total = self.entries.len();
        self.entries
            .iter()
            .enumerate()
            .map(move |(i, entry)| (total - i, entry))
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_prepends() {
        let mut history = History::new();
        history.record(HistoryEntry::new("first".to_string()));
        history.record(HistoryEntry::new("second".to_string()));

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().map(|e| e.item.as_str()), Some("second"));
        assert_eq!(history.entries()[1].item, "first");
    }

    #[test]
    fn test_numbering_counts_down() {
        let mut history = History::new();
        for item in ["a", "b", "c"] {
            history.record(HistoryEntry::new(item.to_string()));
        }

        let numbered: Vec<(usize, &str)> = history
            .numbered()
            .map(|(n, e)| (n, e.item.as_str()))
            .collect();
        assert_eq!(numbered, vec![(3, "c"), (2, "b"), (1, "a")]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut history = History::new();
        history.record(HistoryEntry::new("same".to_string()));
        history.record(HistoryEntry::new("same".to_string()));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_time_label_format() {
        let entry = HistoryEntry::new("x".to_string());
        let label = entry.time_label();
        assert_eq!(label.len(), 8);
        assert_eq!(label.chars().filter(|c| *c == ':').count(), 2);
    }
}
