//! Pronounceable name generation and storage.
//!
//! This crate provides the two building blocks of the names service:
//! - A phonotactic generator alternating vowels and consonant units
//! - A SQLite-backed, append-only store of every generated name
//!
//! Randomness is always injected, so callers (and tests) decide whether
//! output is reproducible.

/// Name generation: alphabet, seeding and the generation loop.
///
/// Exposes the `Generator` and the explicit seed resolution outcome.
pub mod model;

/// Persistence of generated names (insert, count, point and random queries).
pub mod store;
