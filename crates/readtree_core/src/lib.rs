//! Core domain logic for the reading tree.
//! This crate is the single source of truth for work and prerequisite
//! invariants; renderers and launchers consume its typed views.

pub mod config;
pub mod graph;
pub mod logging;
pub mod model;
pub mod registry;
pub mod service;
pub mod view;

pub use config::{default_data_file, ReadingTreeConfig, DEFAULT_DATA_FILE_NAME};
pub use graph::{
    derive_graph, layers, resolve_prerequisites, Edge, Resolution, UnresolvedRef, WorkGraph,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::work::{NewWork, Work, WorkId, WorkValidationError};
pub use registry::work_registry::{LoadOutcome, WorkRegistry};
pub use registry::{RegistryError, RegistryResult};
pub use service::reading_service::ReadingService;
pub use view::canvas::{
    ArrowStyle, CanvasOptions, CanvasView, CardShape, LayoutDirection, WorkCard,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
