//! Per-translation cache for reading state.
//!
//! Files live under `.cache/<sha256 of the translation id>/` so different
//! corpora never share a reading position. The reading position and markers
//! are tiny TOML files; the history list is JSON. Load failures fall back to
//! defaults and save failures are logged so the UI stays responsive.

use crate::config::AppConfig;
use scrubber_core::history::ReadingHistory;
use scrubber_core::markers::Marker;
use scrubber_core::position::ChapterPosition;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CACHE_DIR: &str = ".cache";

const POSITION_FILE: &str = "position.toml";
const MARKERS_FILE: &str = "markers.toml";
const HISTORY_FILE: &str = "history.json";
const CONFIG_FILE: &str = "config.toml";

/// Cache directory for one translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingCache {
    dir: PathBuf,
}

impl ReadingCache {
    pub fn for_translation(translation: &str) -> Self {
        Self::in_root(Path::new(CACHE_DIR), translation)
    }

    pub fn in_root(root: &Path, translation: &str) -> Self {
        Self {
            dir: root.join(hash_name(translation)),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Last reading position, if one was saved and still names a real chapter.
    pub fn load_position(&self) -> Option<ChapterPosition> {
        let data = fs::read_to_string(self.dir.join(POSITION_FILE)).ok()?;
        let position: ChapterPosition = match toml::from_str(&data) {
            Ok(position) => position,
            Err(err) => {
                warn!(dir = %self.dir.display(), "Ignoring unreadable reading position: {err}");
                return None;
            }
        };
        match position.global_index() {
            Ok(_) => Some(position),
            Err(err) => {
                warn!(%position, "Ignoring cached reading position: {err}");
                None
            }
        }
    }

    pub fn save_position(&self, position: &ChapterPosition) {
        match toml::to_string(position) {
            Ok(contents) => self.write(POSITION_FILE, &contents),
            Err(err) => warn!("Failed to serialize reading position: {err}"),
        }
    }

    pub fn load_markers(&self) -> Vec<Marker> {
        let Ok(data) = fs::read_to_string(self.dir.join(MARKERS_FILE)) else {
            return Vec::new();
        };
        match toml::from_str::<MarkerFile>(&data) {
            Ok(file) => file.markers,
            Err(err) => {
                warn!(dir = %self.dir.display(), "Ignoring unreadable markers: {err}");
                Vec::new()
            }
        }
    }

    pub fn save_markers(&self, markers: &[Marker]) {
        let file = MarkerFile {
            markers: markers.to_vec(),
        };
        match toml::to_string(&file) {
            Ok(contents) => self.write(MARKERS_FILE, &contents),
            Err(err) => warn!("Failed to serialize markers: {err}"),
        }
    }

    pub fn load_history(&self, max_entries: usize) -> ReadingHistory {
        let Ok(data) = fs::read_to_string(self.dir.join(HISTORY_FILE)) else {
            return ReadingHistory::with_capacity(max_entries);
        };
        match ReadingHistory::from_json(&data, max_entries) {
            Ok(history) => history,
            Err(err) => {
                warn!(dir = %self.dir.display(), "Ignoring unreadable history: {err}");
                ReadingHistory::with_capacity(max_entries)
            }
        }
    }

    pub fn save_history(&self, history: &ReadingHistory) {
        match history.to_json() {
            Ok(contents) => self.write(HISTORY_FILE, &contents),
            Err(err) => warn!("Failed to serialize history: {err}"),
        }
    }

    /// Per-translation overrides (window geometry, theme, panels).
    pub fn load_config(&self) -> Option<AppConfig> {
        let data = fs::read_to_string(self.dir.join(CONFIG_FILE)).ok()?;
        crate::config::parse_config(&data).ok()
    }

    pub fn save_config(&self, config: &AppConfig) {
        match crate::config::serialize_config(config) {
            Ok(contents) => self.write(CONFIG_FILE, &contents),
            Err(err) => warn!("Failed to serialize config: {err}"),
        }
    }

    fn write(&self, name: &str, contents: &str) {
        let path = self.dir.join(name);
        if let Err(err) = fs::create_dir_all(&self.dir) {
            warn!(path = %self.dir.display(), "Failed to create cache dir: {err}");
            return;
        }
        let result = fs::File::create(&path).and_then(|mut file| file.write_all(contents.as_bytes()));
        match result {
            Ok(()) => debug!(path = %path.display(), "Saved cache file"),
            Err(err) => warn!(path = %path.display(), "Failed to write cache file: {err}"),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct MarkerFile {
    #[serde(default)]
    markers: Vec<Marker>,
}

fn hash_name(translation: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(translation.as_bytes());
    format!("{:x}", hasher.finalize())
}
