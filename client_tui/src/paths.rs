use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::audio::AudioSettings;

/// Where this install keeps its data: score table, audio settings, log.
pub struct ProjectPaths {
    pub scores_path: PathBuf,
    pub settings_path: PathBuf,
    pub log_path: PathBuf,
}

pub fn project_paths() -> Result<ProjectPaths> {
    let dirs = ProjectDirs::from("", "", "paddle-duel")
        .context("could not resolve project directories")?;
    let dir = dirs.data_dir().to_path_buf();
    fs::create_dir_all(&dir).ok();
    Ok(ProjectPaths {
        scores_path: dir.join("scores.json"),
        settings_path: dir.join("settings.json"),
        log_path: dir.join("client.log"),
    })
}

/// Read audio settings, falling back to defaults on any problem.
pub fn load_settings(path: &Path) -> AudioSettings {
    if let Ok(text) = fs::read_to_string(path) {
        if let Ok(settings) = serde_json::from_str::<AudioSettings>(&text) {
            return settings;
        }
        tracing::warn!(path = %path.display(), "settings file unreadable, using defaults");
    }
    AudioSettings::default()
}

pub fn save_settings(path: &Path, settings: &AudioSettings) {
    let data = match serde_json::to_vec_pretty(settings) {
        Ok(data) => data,
        Err(err) => {
            tracing::warn!(%err, "could not encode settings");
            return;
        }
    };
    let tmp = path.with_extension("json.tmp");
    let written = fs::write(&tmp, data).and_then(|()| fs::rename(&tmp, path));
    if let Err(err) = written {
        tracing::warn!(path = %path.display(), %err, "could not save settings");
    }
}
