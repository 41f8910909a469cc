use std::fmt;

use jetcycle_core::Observer;
use jetcycle_thermo::StagnationState;
use uom::si::f64::Ratio;

use crate::{
    event::{Degeneracy, Event},
    parameters::{GasAndFlightParameters, ParameterError, ParametersBuilder},
    performance::Performance,
    results::ResultsRecord,
    station::{Stage, Station, StationTable},
};

/// The engine configurations this crate analyzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// Single-spool afterburning turbojet.
    Turbojet,
    /// Mixed-exhaust afterburning turbofan.
    Turbofan,
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Turbojet => f.write_str("turbojet"),
            EngineKind::Turbofan => f.write_str("turbofan"),
        }
    }
}

/// A steady-state engine cycle.
///
/// Running a cycle is a pure function of its parameters: the same parameter
/// set always yields a bit-identical [`ResultsRecord`], and the observer only
/// watches.
pub trait CycleEngine {
    fn kind(&self) -> EngineKind;

    /// Runs the cycle, reporting each stage to `observer`.
    fn run<O: Observer<Event>>(
        &self,
        parameters: &GasAndFlightParameters,
        observer: O,
    ) -> ResultsRecord;

    /// Runs the cycle without observation.
    fn analyze(&self, parameters: &GasAndFlightParameters) -> ResultsRecord {
        self.run(parameters, ())
    }

    /// Validates `builder` and runs the cycle.
    ///
    /// # Errors
    ///
    /// Returns the [`ParameterError`] from [`ParametersBuilder::build`]; no
    /// stage runs in that case.
    fn try_analyze(&self, builder: &ParametersBuilder) -> Result<ResultsRecord, ParameterError> {
        builder.build().map(|parameters| self.analyze(&parameters))
    }
}

/// Bookkeeping shared by both engines while a run is in progress.
pub(crate) struct Pipeline<O> {
    observer: O,
    stations: StationTable,
    degeneracies: Vec<Degeneracy>,
}

impl<O: Observer<Event>> Pipeline<O> {
    pub(crate) fn new(observer: O) -> Self {
        Self {
            observer,
            stations: StationTable::default(),
            degeneracies: Vec::new(),
        }
    }

    pub(crate) fn station(
        &mut self,
        stage: Stage,
        station: Station,
        state: StagnationState,
        fuel_air_ratio: Option<Ratio>,
    ) {
        self.stations.record(station, state);
        self.observer.observe(&Event::Station {
            stage,
            station,
            state,
            fuel_air_ratio,
        });
    }

    /// Records `degeneracy` if its guard fired.
    pub(crate) fn flag(&mut self, fired: bool, degeneracy: Degeneracy) {
        if fired {
            self.degeneracies.push(degeneracy);
            self.observer.observe(&Event::Degenerate(degeneracy));
        }
    }

    pub(crate) fn performance(&mut self, performance: &Performance) {
        self.flag(performance.thrust_floored, Degeneracy::NearZeroThrust);
        self.observer.observe(&Event::Performance {
            specific_thrust: performance.specific_thrust,
            tsfc: performance.tsfc,
        });
    }

    /// Hands back the recorded stations and degeneracies.
    pub(crate) fn finish(self) -> (StationTable, Vec<Degeneracy>) {
        (self.stations, self.degeneracies)
    }
}
