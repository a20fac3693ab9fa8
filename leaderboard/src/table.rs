use uuid::Uuid;

use crate::record::ScoreRecord;

/// How many records the table retains.
pub const CAPACITY: usize = 10;

/// Result of submitting a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    /// 1-based rank among all records present at submission time, computed
    /// before truncation; a record can rank 11th and be gone.
    pub rank: usize,
    /// Whether the record survived the top-10 cut.
    pub made_table: bool,
}

/// The ranked, capacity-bounded score list.
///
/// Always sorted (player score descending, elapsed seconds ascending) and
/// never longer than [`CAPACITY`].
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    entries: Vec<ScoreRecord>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from loaded records, restoring order and capacity in
    /// case the stored data was stale or hand-edited.
    pub fn from_records(mut entries: Vec<ScoreRecord>) -> Self {
        entries.sort_by(ScoreRecord::ranking_cmp);
        entries.truncate(CAPACITY);
        Self { entries }
    }

    /// Insert a record, re-rank, and cut back to capacity.
    pub fn submit(&mut self, record: ScoreRecord) -> Submission {
        let id = record.id;
        self.entries.push(record);
        // Stable sort: on a full tie the earlier record keeps its spot.
        self.entries.sort_by(ScoreRecord::ranking_cmp);

        let rank = self
            .entries
            .iter()
            .position(|r| r.id == id)
            .expect("submitted record is present")
            + 1;

        self.entries.truncate(CAPACITY);

        Submission {
            rank,
            made_table: rank <= CAPACITY,
        }
    }

    /// Give the identified record its player's name. The name is not part of
    /// the ranking key, so order is untouched. Returns false if the record
    /// was already cut (or never existed).
    pub fn set_name(&mut self, id: Uuid, name: &str) -> bool {
        match self.entries.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.name = name.to_owned();
                true
            }
            None => false,
        }
    }

    pub fn entries(&self) -> &[ScoreRecord] {
        &self.entries
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
