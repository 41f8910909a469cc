//! Compressor models.

mod isentropic;
mod types;

pub use isentropic::isentropic;
pub use types::CompressionResult;
