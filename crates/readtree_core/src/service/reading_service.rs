//! Reading-tree session service.
//!
//! # Responsibility
//! - Own one registry together with the snapshot file backing it.
//! - Persist after every successful add (write-through).
//! - Expose graph and canvas projections for UI/CLI callers.
//!
//! # Invariants
//! - One service instance is the single owner of its registry.
//! - A failed save is reported but does not roll back the in-memory add.

use crate::config::ReadingTreeConfig;
use crate::graph::{derive_graph, layers, WorkGraph};
use crate::model::work::{NewWork, Work};
use crate::registry::work_registry::WorkRegistry;
use crate::registry::RegistryResult;
use crate::view::canvas::{CanvasOptions, CanvasView};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Session facade over a snapshot-backed registry.
pub struct ReadingService {
    registry: WorkRegistry,
    snapshot_path: PathBuf,
    canvas_options: CanvasOptions,
}

impl ReadingService {
    /// Opens the snapshot at `path`; a missing file starts an empty tree.
    pub fn open(path: impl Into<PathBuf>) -> RegistryResult<Self> {
        Self::from_config(&ReadingTreeConfig::default().with_data_file(path))
    }

    /// Opens the configured snapshot and keeps the configured canvas options.
    pub fn from_config(config: &ReadingTreeConfig) -> RegistryResult<Self> {
        let registry = WorkRegistry::open(&config.data_file)?;
        info!(
            "event=session_open module=service status=ok works={} path={}",
            registry.len(),
            config.data_file.display()
        );
        Ok(Self {
            registry,
            snapshot_path: config.data_file.clone(),
            canvas_options: config.canvas,
        })
    }

    /// Adds one work and immediately rewrites the snapshot.
    ///
    /// Returns a copy of the stored work.
    ///
    /// # Errors
    /// - Validation/duplicate errors leave both memory and file untouched.
    /// - A save error is returned after the work was added in memory.
    pub fn add_work(&mut self, request: NewWork) -> RegistryResult<Work> {
        let work = self.registry.add_work(request)?.clone();
        if let Err(err) = self.registry.save(&self.snapshot_path) {
            warn!(
                "event=work_add module=service status=unsaved path={} error={}",
                self.snapshot_path.display(),
                err
            );
            return Err(err);
        }
        info!(
            "event=work_add module=service status=ok works={}",
            self.registry.len()
        );
        Ok(work)
    }

    pub fn registry(&self) -> &WorkRegistry {
        &self.registry
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    pub fn graph(&self) -> WorkGraph {
        derive_graph(&self.registry)
    }

    pub fn layers(&self) -> Vec<Vec<String>> {
        layers(&self.graph())
    }

    /// Canvas view with the session's configured options.
    pub fn canvas(&self) -> CanvasView {
        self.canvas_with(self.canvas_options)
    }

    pub fn canvas_with(&self, options: CanvasOptions) -> CanvasView {
        CanvasView::from_registry(&self.registry, options)
    }
}
