//! Domain model for the reading tree.
//!
//! # Responsibility
//! - Define the canonical work record and the add-work request.
//!
//! # Invariants
//! - Every work carries a stable `WorkId`, but identity inside a registry is
//!   the title.

pub mod work;
