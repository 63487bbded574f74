//! Core record store for the bintrack waste-bin inventory.

/// Domain models for bins, identifiers, and status flags.
pub mod model;
/// Fixed demonstration data sets for the main and zone collections.
pub mod sample;
/// The bounded in-memory store and its operations.
pub mod store;

pub use model::*;
pub use sample::*;
pub use store::*;
