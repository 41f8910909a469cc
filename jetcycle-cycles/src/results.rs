use jetcycle_thermo::{
    StagnationState,
    units::{SpecificThrust, SpecificWork, ThrustSpecificFuelConsumption},
};
use uom::si::f64::{Ratio, Velocity};

use crate::{
    engine::EngineKind,
    event::Degeneracy,
    station::{Station, StationTable},
};

/// Everything one engine run produced.
///
/// Mass-specific figures are per unit of inlet air for thrust and overall
/// fuel, and per unit of the stream entering the burner for the burner
/// fuel-air ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsRecord {
    pub engine: EngineKind,
    pub stations: StationTable,
    pub flight_velocity: Velocity,
    pub exit_velocity: Velocity,
    pub compressor_work: SpecificWork,
    /// Fan work per unit fan air, turbofan only.
    pub fan_work: Option<SpecificWork>,
    /// Work the turbine delivers per unit core air.
    pub shaft_work: SpecificWork,
    pub combustor_fuel_air_ratio: Ratio,
    pub afterburner_fuel_air_ratio: Ratio,
    pub overall_fuel_air_ratio: Ratio,
    pub specific_thrust: SpecificThrust,
    pub tsfc: ThrustSpecificFuelConsumption,
    /// Numeric guards that fired, in the order they fired.
    pub degeneracies: Vec<Degeneracy>,
}

impl ResultsRecord {
    /// The state at `station`, if this engine has that station.
    #[must_use]
    pub fn station(&self, station: Station) -> Option<&StagnationState> {
        self.stations.get(station)
    }

    /// TSFC in the customary mg/(N·s).
    #[must_use]
    pub fn tsfc_mg_per_newton_second(&self) -> f64 {
        self.tsfc.value * 1e6
    }

    /// Whether any numeric guard fired during the run.
    #[must_use]
    pub fn is_suspect(&self) -> bool {
        !self.degeneracies.is_empty()
    }
}
