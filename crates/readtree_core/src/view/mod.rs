//! Presentation-facing projections of the registry.
//!
//! # Responsibility
//! - Hand typed data (cards, edges, options) to an external renderer.
//!
//! # Invariants
//! - Views borrow the registry read-only and own copies of display fields.

pub mod canvas;
