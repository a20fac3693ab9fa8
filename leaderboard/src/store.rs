use std::fs;
use std::path::{Path, PathBuf};

use crate::record::ScoreRecord;

/// Persistence contract for the score table.
///
/// Both operations degrade silently: a store that cannot be read yields an
/// empty list, a save that fails is skipped. The simulation never sees a
/// storage error.
pub trait ScoreStore {
    fn load(&self) -> Vec<ScoreRecord>;
    fn save(&mut self, entries: &[ScoreRecord]);
}

/// Score records as a JSON file on disk. Writes go through a temp file and
/// rename so a crash mid-save cannot corrupt the existing table.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomic(&self, data: &[u8]) -> std::io::Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Vec<ScoreRecord> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), %err, "could not read score file");
                }
                return Vec::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "score file is corrupt, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&mut self, entries: &[ScoreRecord]) {
        let data = match serde_json::to_vec_pretty(entries) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(%err, "could not encode score table");
                return;
            }
        };
        if let Err(err) = self.write_atomic(&data) {
            tracing::warn!(path = %self.path.display(), %err, "could not save score table");
        }
    }
}

/// In-memory store for tests and for running without a writable disk.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    entries: Vec<ScoreRecord>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemStore {
    fn load(&self) -> Vec<ScoreRecord> {
        self.entries.clone()
    }

    fn save(&mut self, entries: &[ScoreRecord]) {
        self.entries = entries.to_vec();
    }
}
