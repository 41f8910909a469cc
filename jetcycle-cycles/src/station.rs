use std::fmt;

use jetcycle_thermo::StagnationState;

/// Engine stations, declared in flow order.
///
/// The turbofan-only stations ([`Station::FanExit`] and
/// [`Station::CoreInlet`]) sit between the inlet exit and the compressor exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Station {
    /// Station 0, the free stream.
    Freestream,
    /// Station 2, inlet exit and fan or compressor face.
    InletExit,
    /// Station 13, fan exit in the bypass duct.
    FanExit,
    /// Station 2.5, core compressor inlet downstream of the fan.
    CoreInlet,
    /// Station 3, compressor exit.
    CompressorExit,
    /// Station 4, combustor exit and turbine inlet.
    TurbineInlet,
    /// Station 5, turbine exit.
    TurbineExit,
    /// Station 6, mixer exit.
    MixerExit,
    /// Station 7, afterburner exit.
    AfterburnerExit,
    /// Station 9, nozzle.
    NozzleExit,
}

impl Station {
    /// The conventional station number.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Station::Freestream => "0",
            Station::InletExit => "2",
            Station::FanExit => "13",
            Station::CoreInlet => "2.5",
            Station::CompressorExit => "3",
            Station::TurbineInlet => "4",
            Station::TurbineExit => "5",
            Station::MixerExit => "6",
            Station::AfterburnerExit => "7",
            Station::NozzleExit => "9",
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "station {}", self.label())
    }
}

/// Pipeline stages, in the order an engine runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Inlet,
    Fan,
    Compressor,
    Combustor,
    Turbine,
    Mixer,
    Afterburner,
    Nozzle,
    Performance,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Inlet => "inlet",
            Stage::Fan => "fan",
            Stage::Compressor => "compressor",
            Stage::Combustor => "combustor",
            Stage::Turbine => "turbine",
            Stage::Mixer => "mixer",
            Stage::Afterburner => "afterburner",
            Stage::Nozzle => "nozzle",
            Stage::Performance => "performance",
        };
        f.write_str(name)
    }
}

/// Stagnation states of one engine run, in flow order.
///
/// Each station appears at most once and its state is fixed once recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationTable {
    entries: Vec<(Station, StagnationState)>,
}

impl StationTable {
    /// Appends a station downstream of every station already recorded.
    pub(crate) fn record(&mut self, station: Station, state: StagnationState) {
        debug_assert!(
            self.entries.last().is_none_or(|(last, _)| *last < station),
            "{station} recorded out of flow order"
        );
        self.entries.push((station, state));
    }

    /// Returns the state at `station`, if this engine has that station.
    #[must_use]
    pub fn get(&self, station: Station) -> Option<&StagnationState> {
        self.entries
            .iter()
            .find_map(|(s, state)| (*s == station).then_some(state))
    }

    /// Iterates over the recorded stations in flow order.
    pub fn iter(&self) -> impl Iterator<Item = (Station, &StagnationState)> {
        self.entries.iter().map(|(station, state)| (*station, state))
    }

    /// The recorded stations in flow order.
    pub fn stations(&self) -> impl Iterator<Item = Station> + '_ {
        self.entries.iter().map(|(station, _)| *station)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
