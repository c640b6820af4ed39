//! Domain logic for the recast content-repurposing platform.
//!
//! Everything in this crate is pure: static catalogs, prompt construction,
//! script assembly, and language detection. No I/O, no clocks, no ambient
//! randomness (callers pass an explicit RNG where variety is wanted), so
//! every function here is directly unit-testable.

pub mod error;
pub mod language;
pub mod platform;
pub mod prompt;
pub mod script;
pub mod styles;
