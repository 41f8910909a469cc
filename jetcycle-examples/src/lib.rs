//! Shared plumbing for the jetcycle example programs.
//!
//! Reads parameter sets from TOML, forwards engine events to `tracing`, and
//! formats results for the terminal.

pub mod config;
pub mod report;

mod logging;

pub use logging::{TracingObserver, init_tracing, verbose_requested};
