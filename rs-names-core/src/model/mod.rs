//! Top-level module for name generation.
//!
//! - Letter units the names are built from (`alphabet`)
//! - Explicit outcome of first-letter seeding (`SeedOutcome`)
//! - The generation loop itself (`Generator`)

/// Single consonants, consonant blends and vowels, plus unit lookups.
pub mod alphabet;

/// High-level name generator with an injectable random source.
pub mod generator;

/// Result of resolving a caller-supplied first letter into a starting unit.
pub mod seed;
