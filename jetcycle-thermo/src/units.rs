//! Unit aliases and helpers built on [`uom`].
//!
//! `uom` has no named quantity for several cycle figures of merit, so they are
//! declared here by dimension.

use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{AvailableEnergy, TemperatureInterval, ThermodynamicTemperature, Velocity},
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin as abs_kelvin,
    },
    typenum::{N1, N2, P1, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific shaft work, J/kg in SI.
pub type SpecificWork = AvailableEnergy;

/// Net thrust per unit reference air mass flow, N/(kg/s) in SI.
///
/// Dimensionally a velocity, so it is read with `velocity` units.
pub type SpecificThrust = Velocity;

/// Fuel mass flow per unit thrust, kg/(N·s) in SI.
///
/// No `uom` unit exists for this dimension; read the SI value from `.value`.
pub type ThrustSpecificFuelConsumption = Quantity<ISQ<N1, Z0, P1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Extension method for `ThermodynamicTemperature` to compute a temperature difference.
pub trait TemperatureOps {
    /// Computes the difference `self - other`.
    ///
    /// A `TemperatureInterval` (a temperature change) is distinct from a
    /// `ThermodynamicTemperature` (a specific temperature value), and `uom`
    /// does not subtract two absolute temperatures directly.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureOps for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
