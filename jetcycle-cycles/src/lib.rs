//! Steady-state cycle analysis of an afterburning turbojet and a
//! mixed-exhaust afterburning turbofan.
//!
//! Each engine is a single forward pass over its stations: the parameter set
//! flows through inlet, compression, combustion, turbine, (mixer),
//! afterburner, and nozzle, and the station states are reduced to specific
//! thrust and thrust-specific fuel consumption.
//!
//! ```
//! use jetcycle_cycles::{CycleEngine, ParametersBuilder, Turbojet};
//!
//! let builder = ParametersBuilder::new();
//! let err = Turbojet.try_analyze(&builder).unwrap_err();
//! assert!(err.to_string().starts_with("parameters are not ready"));
//! ```

mod engine;
mod event;
mod parameters;
mod performance;
mod results;
mod station;
mod turbofan;
mod turbojet;

pub use engine::{CycleEngine, EngineKind};
pub use event::{Degeneracy, Event};
pub use parameters::{
    Efficiencies, Efficiency, GasAndFlightParameters, LossRatios, ParameterError,
    ParametersBuilder, TemperatureLimits, TurbofanDesign, TurbojetDesign,
};
pub use performance::{MassFlows, Performance, reduce};
pub use results::ResultsRecord;
pub use station::{Stage, Station, StationTable};
pub use turbofan::Turbofan;
pub use turbojet::Turbojet;

#[cfg(test)]
pub(crate) mod test_utils;
