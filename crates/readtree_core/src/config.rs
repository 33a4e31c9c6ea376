//! Session configuration.
//!
//! # Responsibility
//! - Name the snapshot file and canvas options used by one session.
//!
//! # Invariants
//! - Defaults reproduce the stock reading tree: `reading_tree.json` in the
//!   working directory and a top-down canvas without physics.

use crate::view::canvas::CanvasOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Snapshot file name used when no path is configured.
pub const DEFAULT_DATA_FILE_NAME: &str = "reading_tree.json";

/// Configuration for one reading-tree session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingTreeConfig {
    /// Snapshot file loaded at startup and rewritten after every add.
    pub data_file: PathBuf,
    pub canvas: CanvasOptions,
}

impl Default for ReadingTreeConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            canvas: CanvasOptions::default(),
        }
    }
}

impl ReadingTreeConfig {
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }
}

/// Default snapshot location, relative to the working directory.
pub fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE_NAME)
}
