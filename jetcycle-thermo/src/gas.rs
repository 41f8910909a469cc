//! Calorically perfect gas model.
//!
//! `PerfectGas` is the usual cycle-analysis approximation: an ideal gas with a
//! constant `cp` and a constant ratio of specific heats `γ`. Air upstream of
//! the combustor and combustion products downstream of it are modeled as two
//! separate instances.
//!
//! The gas constant is deliberately not derived from `cp` and `γ`; callers
//! supply it where it is needed (the flight speed of sound).

use jetcycle_core::constraint::{
    AboveOne, Constraint, ConstraintError, StrictlyPositive, check_finite,
};
use thiserror::Error;
use uom::si::{
    f64::{Ratio, SpecificHeatCapacity, ThermodynamicTemperature, Velocity},
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::{
    guard::{self, Guarded},
    units::SpecificGasConstant,
};

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GasError {
    #[error("invalid heat capacity ratio: {gamma:?}")]
    HeatCapacityRatio {
        gamma: Ratio,
        #[source]
        source: ConstraintError,
    },
    #[error("invalid cp: {cp:?}")]
    Cp {
        cp: SpecificHeatCapacity,
        #[source]
        source: ConstraintError,
    },
}

/// Perfect gas with constant `cp` and `γ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGas {
    gamma: Ratio,
    cp: SpecificHeatCapacity,
}

impl PerfectGas {
    /// Creates a perfect gas from its ratio of specific heats and `cp`.
    ///
    /// # Errors
    ///
    /// Returns [`GasError`] if `gamma` is not a finite value above one or `cp`
    /// is not finite and strictly positive.
    pub fn new(gamma: Ratio, cp: SpecificHeatCapacity) -> Result<Self, GasError> {
        let gamma_value = gamma.get::<ratio>();
        check_finite(gamma_value)
            .and_then(|()| AboveOne::check(&gamma_value))
            .map_err(|source| GasError::HeatCapacityRatio { gamma, source })?;

        let cp_value = cp.get::<joule_per_kilogram_kelvin>();
        check_finite(cp_value)
            .and_then(|()| StrictlyPositive::check(&cp_value))
            .map_err(|source| GasError::Cp { cp, source })?;

        Ok(Self { gamma, cp })
    }

    /// Returns the ratio of specific heats.
    #[must_use]
    pub fn gamma(&self) -> Ratio {
        self.gamma
    }

    /// Returns the constant-pressure specific heat.
    #[must_use]
    pub fn cp(&self) -> SpecificHeatCapacity {
        self.cp
    }

    /// Exponent `(γ-1)/γ` relating temperature ratios to pressure ratios.
    fn temperature_exponent(&self) -> f64 {
        let gamma = self.gamma.get::<ratio>();
        (gamma - 1.0) / gamma
    }

    /// Temperature ratio across an isentropic process with the given pressure ratio.
    ///
    /// Computes `π^((γ-1)/γ)`; a non-positive `π` yields a clamped zero.
    #[must_use]
    pub fn isentropic_temperature_ratio(&self, pressure_ratio: Ratio) -> Guarded {
        guard::powf(pressure_ratio.get::<ratio>(), self.temperature_exponent())
    }

    /// Pressure ratio across an isentropic process with the given temperature ratio.
    ///
    /// Computes `τ^(γ/(γ-1))`; a non-positive `τ` yields a clamped zero.
    #[must_use]
    pub fn isentropic_pressure_ratio(&self, temperature_ratio: Ratio) -> Guarded {
        guard::powf(
            temperature_ratio.get::<ratio>(),
            self.temperature_exponent().recip(),
        )
    }

    /// Ratio of stagnation to static temperature at the given Mach number.
    ///
    /// Computes `1 + (γ-1)/2·M²`.
    #[must_use]
    pub fn stagnation_temperature_ratio(&self, mach: Ratio) -> Ratio {
        let gamma = self.gamma.get::<ratio>();
        let mach = mach.get::<ratio>();
        Ratio::new::<ratio>(1.0 + 0.5 * (gamma - 1.0) * mach * mach)
    }

    /// Speed of sound `sqrt(γ·R·T)` at a static temperature.
    #[must_use]
    pub fn speed_of_sound(
        &self,
        temperature: ThermodynamicTemperature,
        gas_constant: SpecificGasConstant,
    ) -> Velocity {
        let gamma = self.gamma.get::<ratio>();
        let r = gas_constant.get::<joule_per_kilogram_kelvin>();
        let t = temperature.get::<kelvin>();
        Velocity::new::<meter_per_second>((gamma * r * t).sqrt())
    }
}
