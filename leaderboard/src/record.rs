use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name a record carries until its player claims it.
pub const DEFAULT_NAME: &str = "Player";

/// One finished match. Records are identified by `id`, assigned at creation;
/// two matches with identical scores and times remain distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: Uuid,
    pub name: String,
    pub player_score: u8,
    pub opponent_score: u8,
    pub elapsed_seconds: u32,
    /// Local date of the match, already formatted for display.
    pub date: String,
}

impl ScoreRecord {
    pub fn new(player_score: u8, opponent_score: u8, elapsed_seconds: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: DEFAULT_NAME.to_owned(),
            player_score,
            opponent_score,
            elapsed_seconds,
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        }
    }

    /// Table order: higher player score first; among equal scores the faster
    /// win ranks higher.
    pub fn ranking_cmp(&self, other: &Self) -> Ordering {
        other
            .player_score
            .cmp(&self.player_score)
            .then(self.elapsed_seconds.cmp(&other.elapsed_seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(player_score: u8, elapsed_seconds: u32) -> ScoreRecord {
        ScoreRecord::new(player_score, 0, elapsed_seconds)
    }

    #[test]
    fn test_higher_score_ranks_first() {
        let a = record(5, 100);
        let b = record(3, 10);
        assert_eq!(a.ranking_cmp(&b), Ordering::Less);
        assert_eq!(b.ranking_cmp(&a), Ordering::Greater);
    }

    #[test]
    fn test_tie_broken_by_faster_time() {
        let fast = record(5, 30);
        let slow = record(5, 90);
        assert_eq!(fast.ranking_cmp(&slow), Ordering::Less);
    }

    #[test]
    fn test_identical_results_are_distinct_records() {
        let a = record(5, 42);
        let b = record(5, 42);
        assert_eq!(a.ranking_cmp(&b), Ordering::Equal);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_new_record_has_placeholder_name() {
        assert_eq!(record(1, 1).name, DEFAULT_NAME);
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let a = record(4, 77);
        let json = serde_json::to_string(&a).unwrap();
        let back: ScoreRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }
}
