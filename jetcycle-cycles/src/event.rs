use std::fmt;

use jetcycle_thermo::{
    StagnationState,
    units::{SpecificThrust, ThrustSpecificFuelConsumption},
};
use uom::si::f64::Ratio;

use crate::station::{Stage, Station};

/// Events emitted to an observer while an engine runs.
///
/// Events are informational. An observer sees exactly what ends up in the
/// returned [`ResultsRecord`](crate::ResultsRecord) and cannot alter it.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A station state was computed.
    Station {
        stage: Stage,
        station: Station,
        state: StagnationState,
        /// Fuel-air ratio set by this stage, for the burners.
        fuel_air_ratio: Option<Ratio>,
    },

    /// A numeric guard fired.
    Degenerate(Degeneracy),

    /// The station states were reduced to performance figures.
    Performance {
        specific_thrust: SpecificThrust,
        tsfc: ThrustSpecificFuelConsumption,
    },
}

/// A numeric guard that fired during a run.
///
/// The run still completes with finite numbers, but results carrying any of
/// these are physically suspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degeneracy {
    /// A burner's heat-release denominator was non-positive and clamped.
    FuelAirDenominator { stage: Stage },

    /// A power law was evaluated on a non-positive base and forced to zero.
    NonPositivePowerBase { stage: Stage },

    /// A mass-flow divisor was non-positive and clamped.
    NonPositiveMassFlow { stage: Stage },

    /// Nozzle inlet pressure was below ambient and raised to it.
    NozzlePressureFloor,

    /// Specific thrust was at or below the TSFC floor.
    NearZeroThrust,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degeneracy::FuelAirDenominator { stage } => {
                write!(f, "{stage}: heat-release denominator clamped")
            }
            Degeneracy::NonPositivePowerBase { stage } => {
                write!(f, "{stage}: non-positive power base")
            }
            Degeneracy::NonPositiveMassFlow { stage } => {
                write!(f, "{stage}: non-positive mass flow clamped")
            }
            Degeneracy::NozzlePressureFloor => {
                f.write_str("nozzle: inlet pressure below ambient, floored")
            }
            Degeneracy::NearZeroThrust => f.write_str("performance: near-zero specific thrust"),
        }
    }
}
