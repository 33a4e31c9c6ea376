//! Work registry and snapshot persistence.
//!
//! # Responsibility
//! - Own every `Work` record of one reading tree.
//! - Load and save the registry as a flat JSON snapshot file.
//!
//! # Invariants
//! - Titles are unique at all times; duplicates are rejected, never merged.
//! - Failed loads never partially populate the registry.
//! - A failed save never changes in-memory state.
//!
//! # See also
//! - crate::model::work

use crate::model::work::WorkValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod snapshot;
pub mod work_registry;

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors from registry mutation and snapshot persistence.
///
/// Variants are distinct so callers can tell a duplicate (inline message)
/// from an I/O failure or a corrupt snapshot (offer reset).
#[derive(Debug)]
pub enum RegistryError {
    /// Title is empty or whitespace only.
    InvalidTitle(WorkValidationError),
    /// A work with this exact title already exists.
    DuplicateTitle(String),
    /// Snapshot file could not be read or written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Snapshot content is not valid JSON.
    Parse(serde_json::Error),
    /// Snapshot is valid JSON but does not match the expected shape.
    Schema {
        /// Zero-based index of the offending entry, when one is known.
        entry: Option<usize>,
        message: String,
    },
    /// Registry content could not be serialized.
    Encode(serde_json::Error),
}

impl RegistryError {
    pub(crate) fn schema(entry: Option<usize>, message: impl Into<String>) -> Self {
        Self::Schema {
            entry,
            message: message.into(),
        }
    }
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle(err) => write!(f, "{err}"),
            Self::DuplicateTitle(title) => write!(f, "a work titled `{title}` already exists"),
            Self::Io { path, source } => {
                write!(f, "snapshot i/o failed for `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "snapshot is not valid JSON: {err}"),
            Self::Schema {
                entry: Some(index),
                message,
            } => write!(f, "invalid snapshot entry #{index}: {message}"),
            Self::Schema {
                entry: None,
                message,
            } => write!(f, "invalid snapshot: {message}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTitle(err) => Some(err),
            Self::DuplicateTitle(_) => None,
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Schema { .. } => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<WorkValidationError> for RegistryError {
    fn from(value: WorkValidationError) -> Self {
        Self::InvalidTitle(value)
    }
}
