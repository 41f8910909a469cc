use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    ratio::ratio,
};

/// Stagnation (total) conditions at an engine station.
///
/// The temperature and pressure a flow would reach if brought to rest
/// adiabatically. A station's state is final once computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagnationState {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
}

impl StagnationState {
    /// Creates a stagnation state from its temperature and pressure.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, pressure: Pressure) -> Self {
        Self {
            temperature,
            pressure,
        }
    }

    /// Returns a new state with the given temperature, keeping the pressure.
    #[must_use]
    pub fn with_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            temperature,
            ..self
        }
    }

    /// Returns a new state with the given pressure, keeping the temperature.
    #[must_use]
    pub fn with_pressure(self, pressure: Pressure) -> Self {
        Self { pressure, ..self }
    }

    /// Returns a new state with the pressure scaled by `factor`.
    #[must_use]
    pub fn with_pressure_ratio(self, factor: Ratio) -> Self {
        self.with_pressure(self.pressure * factor.get::<ratio>())
    }
}
