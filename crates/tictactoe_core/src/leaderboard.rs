//! Win counts per player name for the lifetime of the process.

use derive_getters::Getters;
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// One row of a leaderboard snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct LeaderboardEntry {
    /// Stored name with its first character capitalized.
    display_name: String,
    /// Sessions won.
    wins: u32,
}

impl std::fmt::Display for LeaderboardEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let noun = if self.wins == 1 { "win" } else { "wins" };
        write!(f, "{}: {} {}", self.display_name, self.wins, noun)
    }
}

/// Case-insensitive win table.
///
/// Names are stored lowercased, so "Ann" and "ANN" share one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    wins: BTreeMap<String, u32>,
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Leaderboard {
    /// Creates an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one win for `name`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, name: &str) {
        let count = self.wins.entry(normalize(name)).or_insert(0);
        *count += 1;
        info!(wins = *count, "Win recorded");
    }

    /// Wins recorded for `name`, matched case-insensitively.
    pub fn wins(&self, name: &str) -> u32 {
        self.wins.get(&normalize(name)).copied().unwrap_or(0)
    }

    /// Number of distinct players with at least one win.
    pub fn len(&self) -> usize {
        self.wins.len()
    }

    /// True when nobody has won yet.
    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }

    /// Entries by wins, most first. Ties keep alphabetical order.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .wins
            .iter()
            .map(|(key, &wins)| LeaderboardEntry {
                display_name: capitalize(key),
                wins,
            })
            .collect();
        entries.sort_by(|a, b| b.wins.cmp(&a.wins));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_merge() {
        let mut board = Leaderboard::new();
        board.record_win("Ann");
        board.record_win("ann");
        let snapshot = board.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].display_name(), "Ann");
        assert_eq!(*snapshot[0].wins(), 2);
        assert_eq!(snapshot[0].to_string(), "Ann: 2 wins");
        assert_eq!(board.wins("ANN"), 2);
    }

    #[test]
    fn test_sorted_by_wins_descending() {
        let mut board = Leaderboard::new();
        for _ in 0..3 {
            board.record_win("A");
        }
        for _ in 0..5 {
            board.record_win("B");
        }
        let names: Vec<_> = board.snapshot().iter().map(|e| e.display_name().clone()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn test_ties_are_deterministic() {
        let mut board = Leaderboard::new();
        board.record_win("zed");
        board.record_win("amy");
        board.record_win("Max");
        let first = board.snapshot();
        let names: Vec<_> = first.iter().map(|e| e.display_name().as_str()).collect();
        assert_eq!(names, ["Amy", "Max", "Zed"]);
        assert_eq!(board.snapshot(), first);
    }

    #[test]
    fn test_empty_snapshot() {
        let board = Leaderboard::new();
        assert!(board.is_empty());
        assert!(board.snapshot().is_empty());
        assert_eq!(board.wins("nobody"), 0);
    }

    #[test]
    fn test_display_keeps_rest_of_name() {
        let mut board = Leaderboard::new();
        board.record_win("mary ANN");
        let entry = &board.snapshot()[0];
        assert_eq!(entry.display_name(), "Mary ann");
        assert_eq!(entry.to_string(), "Mary ann: 1 win");
    }
}
