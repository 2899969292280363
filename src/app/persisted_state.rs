// SPDX-License-Identifier: MPL-2.0
//! Remembered dialog directories, stored as CBOR.
//!
//! Unlike `settings.toml`, this file is written by the application only and
//! never meant to be edited by hand. It lives in the data directory:
//!
//! 1. `load_from()`/`save_to()` with an explicit directory
//! 2. `--data-dir` on the command line
//! 3. `IMAGE_PROCESSOR_DATA_DIR` environment variable
//! 4. Platform-specific data directory
//!
//! Failures never abort anything: they come back as a notification key the
//! caller shows as a warning toast.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Initial directory of the open dialog.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,

    /// Initial directory of the save dialog.
    #[serde(default)]
    pub last_save_directory: Option<PathBuf>,
}

impl AppState {
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Reads the state file under `base_dir`, or the resolved data directory
    /// when `None`. A missing file is not an error.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = state_file_path(base_dir) else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                log::warn!("cannot open {}: {err}", path.display());
                return (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                );
            }
        };

        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(err) => {
                log::warn!("discarding unreadable {}: {err}", path.display());
                (
                    Self::default(),
                    Some("notification-state-parse-error".to_string()),
                )
            }
        }
    }

    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Writes the state file, creating its directory first.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = state_file_path(base_dir) else {
            return Some("notification-state-write-error".to_string());
        };

        let written = path
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| fs::File::create(&path))
            .map_err(|err| err.to_string())
            .and_then(|file| {
                ciborium::into_writer(self, BufWriter::new(file)).map_err(|err| err.to_string())
            });

        match written {
            Ok(()) => None,
            Err(err) => {
                log::warn!("cannot write {}: {err}", path.display());
                Some("notification-state-write-error".to_string())
            }
        }
    }

    /// Remembers the directory holding a file the user just opened.
    pub fn remember_open(&mut self, file_path: &Path) {
        if let Some(parent) = non_empty_parent(file_path) {
            self.last_open_directory = Some(parent);
        }
    }

    /// Remembers the directory holding a file the user just saved.
    pub fn remember_save(&mut self, file_path: &Path) {
        if let Some(parent) = non_empty_parent(file_path) {
            self.last_save_directory = Some(parent);
        }
    }
}

fn non_empty_parent(file_path: &Path) -> Option<PathBuf> {
    file_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|dir| dir.join(STATE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn remember_keeps_parent_directory() {
        let mut state = AppState::default();
        state.remember_open(Path::new("/home/user/photos/cat.jpg"));
        state.remember_save(Path::new("/tmp/out.png"));

        assert_eq!(
            state.last_open_directory,
            Some(PathBuf::from("/home/user/photos"))
        );
        assert_eq!(state.last_save_directory, Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn remember_ignores_paths_without_directory() {
        let mut state = AppState::default();
        state.remember_open(Path::new("/"));
        state.remember_save(Path::new("bare.png"));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().join("nested");
        let state = AppState {
            last_open_directory: Some(PathBuf::from("/in")),
            last_save_directory: Some(PathBuf::from("/out")),
        };

        assert!(state.save_to(Some(base_dir.clone())).is_none());
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, state);
    }

    #[test]
    fn missing_file_loads_defaults_silently() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn corrupted_file_loads_defaults_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), "not cbor").expect("write file");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
        assert_eq!(state, AppState::default());
    }
}
