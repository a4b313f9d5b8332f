//! Core types shared by binday collection sources.

/// Domain models and identifiers shared by all sources.
pub mod model;
/// Traits describing what a collection source provides.
pub mod ports;

pub use model::*;
pub use ports::*;
