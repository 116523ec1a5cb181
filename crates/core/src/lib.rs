//! `stockcast-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP, no storage).

pub mod error;
pub mod id;
pub mod period;

pub use error::{EngineError, EngineResult};
pub use id::ItemId;
pub use period::Period;
