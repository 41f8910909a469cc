//! Building blocks shared by the jetcycle crates.
//!
//! - [`constraint`]: type-level numeric invariants checked at construction.
//! - [`Model`]: a deterministic mapping from a typed input to a typed output.
//! - [`Observer`]: a read-only hook that sees events emitted while a model runs.

pub mod constraint;

mod model;
mod observer;

pub use model::Model;
pub use observer::Observer;
