//! In-memory work registry with explicit snapshot persistence.
//!
//! # Responsibility
//! - Store works keyed by title and enforce title uniqueness.
//! - Save/load the full registry to/from a snapshot file.
//!
//! # Invariants
//! - `add_work` never overwrites an existing title.
//! - `load` replaces the whole set or leaves it untouched.
//! - The registry never persists on its own; callers decide when to save.

use super::snapshot;
use super::{RegistryError, RegistryResult};
use crate::model::work::{NewWork, Work};
use indexmap::IndexMap;
use log::{error, info};
use std::path::Path;
use std::time::Instant;

/// Result of a `load` call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Snapshot file does not exist; registry left as-is.
    Missing,
    /// Registry replaced with this many works.
    Loaded(usize),
}

/// Authoritative collection of works for one reading tree.
#[derive(Debug, Clone, Default)]
pub struct WorkRegistry {
    works: IndexMap<String, Work>,
}

impl WorkRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry and loads `path` into it when the file exists.
    pub fn open(path: impl AsRef<Path>) -> RegistryResult<Self> {
        let mut registry = Self::new();
        registry.load(path)?;
        Ok(registry)
    }

    /// Adds a new work with a freshly generated id.
    ///
    /// # Errors
    /// - `RegistryError::InvalidTitle` when the title is blank.
    /// - `RegistryError::DuplicateTitle` when the exact title already exists.
    ///
    /// Registry state is unchanged on error.
    pub fn add_work(&mut self, request: NewWork) -> RegistryResult<&Work> {
        if self.works.contains_key(request.title.as_str()) {
            return Err(RegistryError::DuplicateTitle(request.title));
        }
        let work = request.into_work()?;
        let (index, _) = self.works.insert_full(work.title.clone(), work);
        Ok(&self.works[index])
    }

    /// Returns every work, in insertion order.
    pub fn get_all(&self) -> Vec<&Work> {
        self.works.values().collect()
    }

    pub fn works(&self) -> impl Iterator<Item = &Work> {
        self.works.values()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.works.keys().map(String::as_str)
    }

    /// Sorted titles, suitable as prerequisite candidates in an input form.
    pub fn candidate_titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.titles().collect();
        titles.sort_unstable();
        titles
    }

    pub fn get(&self, title: &str) -> Option<&Work> {
        self.works.get(title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.works.contains_key(title)
    }

    pub fn len(&self) -> usize {
        self.works.len()
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    /// Writes the full registry to `path`, replacing any existing content.
    ///
    /// # Side effects
    /// - Emits `registry_save` logging events with duration and status.
    pub fn save(&self, path: impl AsRef<Path>) -> RegistryResult<()> {
        let path = path.as_ref();
        let started_at = Instant::now();

        let text = snapshot::encode(self.works.values())?;
        if let Err(source) = std::fs::write(path, text) {
            error!(
                "event=registry_save module=registry status=error duration_ms={} path={} error={}",
                started_at.elapsed().as_millis(),
                path.display(),
                source
            );
            return Err(RegistryError::Io {
                path: path.to_path_buf(),
                source,
            });
        }

        info!(
            "event=registry_save module=registry status=ok duration_ms={} works={}",
            started_at.elapsed().as_millis(),
            self.works.len()
        );
        Ok(())
    }

    /// Replaces the registry content with the snapshot at `path`.
    ///
    /// A missing file is not an error and leaves the registry unchanged.
    ///
    /// # Errors
    /// - `RegistryError::Io` when the file exists but cannot be read.
    /// - `RegistryError::Parse` / `RegistryError::Schema` for bad content,
    ///   including bytes that are not UTF-8.
    pub fn load(&mut self, path: impl AsRef<Path>) -> RegistryResult<LoadOutcome> {
        let path = path.as_ref();
        let started_at = Instant::now();

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "event=registry_load module=registry status=skipped reason=missing_file path={}",
                    path.display()
                );
                return Ok(LoadOutcome::Missing);
            }
            Err(source) => {
                error!(
                    "event=registry_load module=registry status=error error_code=read_failed path={} error={}",
                    path.display(),
                    source
                );
                return Err(RegistryError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let works = match snapshot::decode(&bytes) {
            Ok(works) => works,
            Err(err) => {
                error!(
                    "event=registry_load module=registry status=error error_code=decode_failed duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err);
            }
        };

        self.works = works
            .into_iter()
            .map(|work| (work.title.clone(), work))
            .collect();

        info!(
            "event=registry_load module=registry status=ok duration_ms={} works={}",
            started_at.elapsed().as_millis(),
            self.works.len()
        );
        Ok(LoadOutcome::Loaded(self.works.len()))
    }
}
