//! Graph views derived from a work registry.
//!
//! - [`derive`] resolves prerequisite references into a node/edge list.
//! - [`layers`] groups that graph into top-down layers, tolerating cycles.
//!
//! Both are pure functions over a borrowed registry; nothing here is cached.

pub mod derive;
pub mod layers;

pub use derive::{derive_graph, resolve_prerequisites, Edge, Resolution, UnresolvedRef, WorkGraph};
pub use layers::layers;
