//! Core use-case services.
//!
//! # Responsibility
//! - Wrap the registry into session-level entry points for UI/CLI callers.
//! - Keep persistence timing (write-through) out of the registry itself.

pub mod reading_service;
