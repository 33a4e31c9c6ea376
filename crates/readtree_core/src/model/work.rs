//! Work domain model.
//!
//! # Responsibility
//! - Define the canonical record for one reading (book, essay, paper).
//! - Provide the request shape used by input layers to add a work.
//!
//! # Invariants
//! - `id` is generated once and never reused for another work.
//! - `title` is the natural key inside a registry and is never blank.
//! - `prerequisites` are soft references by title; they may name works that
//!   do not exist (yet).
//!
//! # See also
//! - crate::registry::work_registry

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque, stable identifier of a work.
///
/// Freshly created works get a random v4 UUID in string form, but persisted
/// snapshots may carry any non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct WorkId(String);

impl WorkId {
    /// Generates a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an identifier read from external storage.
    ///
    /// Returns `None` for blank input.
    pub fn parse(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return None;
        }
        Some(Self(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for WorkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validation failures for work fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkValidationError {
    /// Title is empty or whitespace only.
    BlankTitle,
}

impl Display for WorkValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "title must not be blank"),
        }
    }
}

impl Error for WorkValidationError {}

/// Canonical record for one reading.
///
/// Serialized field names match the snapshot file format, so the
/// prerequisite list is written as `antes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Work {
    /// Stable identifier; not used for lookups.
    pub id: WorkId,
    /// Natural key inside a registry.
    pub title: String,
    pub author: Option<String>,
    /// Cover image location. May be empty.
    pub image_url: Option<String>,
    /// Titles of works to read before this one, in user order.
    #[serde(rename = "antes")]
    pub prerequisites: Vec<String>,
}

impl Work {
    /// Creates a work with a generated id and no optional fields.
    pub fn new(title: impl Into<String>) -> Result<Self, WorkValidationError> {
        Self::with_id(WorkId::generate(), title)
    }

    /// Creates a work with a caller-provided id.
    ///
    /// Used by snapshot loading where identity already exists on disk.
    pub fn with_id(id: WorkId, title: impl Into<String>) -> Result<Self, WorkValidationError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id,
            title,
            author: None,
            image_url: None,
            prerequisites: Vec::new(),
        })
    }

    /// Checks field invariants that must hold for any stored work.
    pub fn validate(&self) -> Result<(), WorkValidationError> {
        validate_title(&self.title)
    }

    /// Returns the image location when it is present and non-empty.
    pub fn cover(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Request model for adding a work to a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewWork {
    pub title: String,
    pub author: Option<String>,
    pub image_url: Option<String>,
    /// Titles of works to read first. Not required to exist.
    pub prerequisites: Vec<String>,
}

impl NewWork {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Appends one prerequisite title.
    pub fn read_after(mut self, title: impl Into<String>) -> Self {
        self.prerequisites.push(title.into());
        self
    }

    pub(crate) fn into_work(self) -> Result<Work, WorkValidationError> {
        let mut work = Work::new(self.title)?;
        work.author = self.author;
        work.image_url = self.image_url;
        work.prerequisites = self.prerequisites;
        Ok(work)
    }
}

/// Titles are stored verbatim; only blank titles are rejected.
pub fn validate_title(title: &str) -> Result<(), WorkValidationError> {
    if title.trim().is_empty() {
        return Err(WorkValidationError::BlankTitle);
    }
    Ok(())
}
