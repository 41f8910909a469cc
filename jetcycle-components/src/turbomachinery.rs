//! Turbomachinery component models.
//!
//! The compressor model covers every compression stage in the cycles: the
//! turbojet compressor, the turbofan fan, and the turbofan core compressor.
//! The turbine model is driven by a shaft work balance rather than a pressure
//! ratio, since the turbine must deliver exactly the work its spool absorbs.

pub mod compressor;
pub mod turbine;
