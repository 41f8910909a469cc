//! The validated parameter set shared by both engines.
//!
//! Parameters are collected in a [`ParametersBuilder`], where every field is
//! optional, and validated once by [`ParametersBuilder::build`]. Engines only
//! ever see a complete [`GasAndFlightParameters`].

use jetcycle_components::{combustion::Burner, inlet::FlightCondition};
use jetcycle_core::constraint::{
    Constrained, Constraint, ConstraintError, NonNegative, StrictlyPositive, check_finite,
};
use jetcycle_thermo::{GasError, PerfectGas, units::SpecificGasConstant};
use thiserror::Error;
use uom::si::{
    f64::{AvailableEnergy, Pressure, Ratio, SpecificHeatCapacity, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An efficiency, validated as finite and greater than zero.
pub type Efficiency = Constrained<Ratio, StrictlyPositive>;

/// Component efficiencies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Efficiencies {
    /// Inlet pressure recovery, `P_t2 = η·P_t0`.
    pub inlet: Efficiency,
    pub compressor: Efficiency,
    pub fan: Efficiency,
    pub combustor: Efficiency,
    pub turbine: Efficiency,
    pub afterburner: Efficiency,
    pub nozzle: Efficiency,
}

/// Stagnation pressure ratios across the non-turbomachinery components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossRatios {
    pub combustor: Ratio,
    pub afterburner: Ratio,
    pub mixer: Ratio,
}

/// Burner exit temperatures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureLimits {
    /// `T_t4`, main combustor exit.
    pub turbine_inlet: ThermodynamicTemperature,
    /// `T_t7`, afterburner exit.
    pub afterburner_exit: ThermodynamicTemperature,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbojetDesign {
    pub compressor_pressure_ratio: Ratio,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbofanDesign {
    /// Bypass air mass flow per unit core air.
    pub bypass_ratio: Constrained<Ratio, NonNegative>,
    pub fan_pressure_ratio: Ratio,
    /// Core compressor pressure ratio, downstream of the fan.
    pub compressor_pressure_ratio: Ratio,
}

/// A complete, validated parameter set.
///
/// Holds both engines' design data so one set can drive either engine.
/// Only obtainable through [`ParametersBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasAndFlightParameters {
    air: PerfectGas,
    gas: PerfectGas,
    air_gas_constant: SpecificGasConstant,
    fuel_heating_value: AvailableEnergy,
    flight: FlightCondition,
    efficiencies: Efficiencies,
    losses: LossRatios,
    limits: TemperatureLimits,
    turbojet: TurbojetDesign,
    turbofan: TurbofanDesign,
}

impl GasAndFlightParameters {
    /// Properties of the air upstream of the main combustor.
    #[must_use]
    pub fn air(&self) -> &PerfectGas {
        &self.air
    }

    /// Properties of the combustion products downstream of it.
    #[must_use]
    pub fn gas(&self) -> &PerfectGas {
        &self.gas
    }

    #[must_use]
    pub fn air_gas_constant(&self) -> SpecificGasConstant {
        self.air_gas_constant
    }

    #[must_use]
    pub fn fuel_heating_value(&self) -> AvailableEnergy {
        self.fuel_heating_value
    }

    #[must_use]
    pub fn flight(&self) -> &FlightCondition {
        &self.flight
    }

    #[must_use]
    pub fn efficiencies(&self) -> &Efficiencies {
        &self.efficiencies
    }

    #[must_use]
    pub fn losses(&self) -> &LossRatios {
        &self.losses
    }

    #[must_use]
    pub fn limits(&self) -> &TemperatureLimits {
        &self.limits
    }

    #[must_use]
    pub fn turbojet(&self) -> &TurbojetDesign {
        &self.turbojet
    }

    #[must_use]
    pub fn turbofan(&self) -> &TurbofanDesign {
        &self.turbofan
    }

    /// Design data of the main combustor.
    #[must_use]
    pub fn main_burner(&self) -> Burner {
        Burner {
            exit_temperature: self.limits.turbine_inlet,
            efficiency: self.efficiencies.combustor.into_inner(),
            pressure_ratio: self.losses.combustor,
            heating_value: self.fuel_heating_value,
        }
    }

    /// Design data of the afterburner.
    #[must_use]
    pub fn afterburner(&self) -> Burner {
        Burner {
            exit_temperature: self.limits.afterburner_exit,
            efficiency: self.efficiencies.afterburner.into_inner(),
            pressure_ratio: self.losses.afterburner,
            heating_value: self.fuel_heating_value,
        }
    }
}

/// Errors returned by [`ParametersBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// One or more fields were never set, listed in declaration order.
    #[error("parameters are not ready, missing: {}", .missing.join(", "))]
    NotReady { missing: Vec<&'static str> },

    #[error("invalid value for `{field}`: {source}")]
    Invalid {
        field: &'static str,
        source: ConstraintError,
    },
}

/// Collects engine parameters, each of which may be left unset.
///
/// Values are plain `uom` quantities. With the `serde` feature the builder
/// reads from any self-describing format, with every quantity given as its SI
/// base value (kelvin, pascal, J/kg, J/kg·K).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ParametersBuilder {
    pub gamma_air: Option<Ratio>,
    pub gamma_gas: Option<Ratio>,
    pub cp_air: Option<SpecificHeatCapacity>,
    pub cp_gas: Option<SpecificHeatCapacity>,
    pub r_air: Option<SpecificGasConstant>,
    pub fuel_heating_value: Option<AvailableEnergy>,
    pub mach: Option<Ratio>,
    pub ambient_temperature: Option<ThermodynamicTemperature>,
    pub ambient_pressure: Option<Pressure>,
    pub eta_inlet: Option<Ratio>,
    pub eta_compressor: Option<Ratio>,
    pub eta_fan: Option<Ratio>,
    pub eta_combustor: Option<Ratio>,
    pub eta_turbine: Option<Ratio>,
    pub eta_afterburner: Option<Ratio>,
    pub eta_nozzle: Option<Ratio>,
    pub pi_combustor: Option<Ratio>,
    pub pi_afterburner: Option<Ratio>,
    pub pi_mixer: Option<Ratio>,
    pub turbine_inlet_temperature: Option<ThermodynamicTemperature>,
    pub afterburner_exit_temperature: Option<ThermodynamicTemperature>,
    pub turbojet_compressor_pressure_ratio: Option<Ratio>,
    pub bypass_ratio: Option<Ratio>,
    pub fan_pressure_ratio: Option<Ratio>,
    pub turbofan_compressor_pressure_ratio: Option<Ratio>,
}

macro_rules! setters {
    ($($field:ident: $ty:ty),+ $(,)?) => {
        $(
            #[must_use]
            pub fn $field(mut self, value: $ty) -> Self {
                self.$field = Some(value);
                self
            }
        )+
    };
}

impl ParametersBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    setters! {
        gamma_air: Ratio,
        gamma_gas: Ratio,
        cp_air: SpecificHeatCapacity,
        cp_gas: SpecificHeatCapacity,
        r_air: SpecificGasConstant,
        fuel_heating_value: AvailableEnergy,
        mach: Ratio,
        ambient_temperature: ThermodynamicTemperature,
        ambient_pressure: Pressure,
        eta_inlet: Ratio,
        eta_compressor: Ratio,
        eta_fan: Ratio,
        eta_combustor: Ratio,
        eta_turbine: Ratio,
        eta_afterburner: Ratio,
        eta_nozzle: Ratio,
        pi_combustor: Ratio,
        pi_afterburner: Ratio,
        pi_mixer: Ratio,
        turbine_inlet_temperature: ThermodynamicTemperature,
        afterburner_exit_temperature: ThermodynamicTemperature,
        turbojet_compressor_pressure_ratio: Ratio,
        bypass_ratio: Ratio,
        fan_pressure_ratio: Ratio,
        turbofan_compressor_pressure_ratio: Ratio,
    }

    /// Validates the collected fields into a parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NotReady`] naming every unset field, or
    /// [`ParameterError::Invalid`] for the first field (in declaration order)
    /// outside its range:
    ///
    /// - `γ` must exceed one.
    /// - Specific heats, `R`, heating value, ambient state, burner exit
    ///   temperatures, and efficiencies must be strictly positive.
    /// - Mach number and bypass ratio must be non-negative.
    /// - Pressure ratios only need to be finite.
    pub fn build(&self) -> Result<GasAndFlightParameters, ParameterError> {
        let mut missing = Vec::new();
        let mut take = |name: &'static str, is_set: bool| {
            if !is_set {
                missing.push(name);
            }
        };
        take("gamma_air", self.gamma_air.is_some());
        take("gamma_gas", self.gamma_gas.is_some());
        take("cp_air", self.cp_air.is_some());
        take("cp_gas", self.cp_gas.is_some());
        take("r_air", self.r_air.is_some());
        take("fuel_heating_value", self.fuel_heating_value.is_some());
        take("mach", self.mach.is_some());
        take("ambient_temperature", self.ambient_temperature.is_some());
        take("ambient_pressure", self.ambient_pressure.is_some());
        take("eta_inlet", self.eta_inlet.is_some());
        take("eta_compressor", self.eta_compressor.is_some());
        take("eta_fan", self.eta_fan.is_some());
        take("eta_combustor", self.eta_combustor.is_some());
        take("eta_turbine", self.eta_turbine.is_some());
        take("eta_afterburner", self.eta_afterburner.is_some());
        take("eta_nozzle", self.eta_nozzle.is_some());
        take("pi_combustor", self.pi_combustor.is_some());
        take("pi_afterburner", self.pi_afterburner.is_some());
        take("pi_mixer", self.pi_mixer.is_some());
        take("turbine_inlet_temperature", self.turbine_inlet_temperature.is_some());
        take("afterburner_exit_temperature", self.afterburner_exit_temperature.is_some());
        take(
            "turbojet_compressor_pressure_ratio",
            self.turbojet_compressor_pressure_ratio.is_some(),
        );
        take("bypass_ratio", self.bypass_ratio.is_some());
        take("fan_pressure_ratio", self.fan_pressure_ratio.is_some());
        take(
            "turbofan_compressor_pressure_ratio",
            self.turbofan_compressor_pressure_ratio.is_some(),
        );

        let (
            Some(gamma_air),
            Some(gamma_gas),
            Some(cp_air),
            Some(cp_gas),
            Some(r_air),
            Some(fuel_heating_value),
            Some(mach),
            Some(ambient_temperature),
            Some(ambient_pressure),
            Some(eta_inlet),
            Some(eta_compressor),
            Some(eta_fan),
            Some(eta_combustor),
            Some(eta_turbine),
            Some(eta_afterburner),
            Some(eta_nozzle),
            Some(pi_combustor),
            Some(pi_afterburner),
            Some(pi_mixer),
            Some(turbine_inlet_temperature),
            Some(afterburner_exit_temperature),
            Some(turbojet_compressor_pressure_ratio),
            Some(bypass_ratio),
            Some(fan_pressure_ratio),
            Some(turbofan_compressor_pressure_ratio),
        ) = (
            self.gamma_air,
            self.gamma_gas,
            self.cp_air,
            self.cp_gas,
            self.r_air,
            self.fuel_heating_value,
            self.mach,
            self.ambient_temperature,
            self.ambient_pressure,
            self.eta_inlet,
            self.eta_compressor,
            self.eta_fan,
            self.eta_combustor,
            self.eta_turbine,
            self.eta_afterburner,
            self.eta_nozzle,
            self.pi_combustor,
            self.pi_afterburner,
            self.pi_mixer,
            self.turbine_inlet_temperature,
            self.afterburner_exit_temperature,
            self.turbojet_compressor_pressure_ratio,
            self.bypass_ratio,
            self.fan_pressure_ratio,
            self.turbofan_compressor_pressure_ratio,
        )
        else {
            return Err(ParameterError::NotReady { missing });
        };

        let air = perfect_gas("gamma_air", "cp_air", gamma_air, cp_air)?;
        let gas = perfect_gas("gamma_gas", "cp_gas", gamma_gas, cp_gas)?;
        positive("r_air", r_air.value)?;
        positive("fuel_heating_value", fuel_heating_value.value)?;
        non_negative("mach", mach.value)?;
        positive("ambient_temperature", ambient_temperature.get::<kelvin>())?;
        positive("ambient_pressure", ambient_pressure.value)?;
        let efficiencies = Efficiencies {
            inlet: efficiency("eta_inlet", eta_inlet)?,
            compressor: efficiency("eta_compressor", eta_compressor)?,
            fan: efficiency("eta_fan", eta_fan)?,
            combustor: efficiency("eta_combustor", eta_combustor)?,
            turbine: efficiency("eta_turbine", eta_turbine)?,
            afterburner: efficiency("eta_afterburner", eta_afterburner)?,
            nozzle: efficiency("eta_nozzle", eta_nozzle)?,
        };
        finite("pi_combustor", pi_combustor.value)?;
        finite("pi_afterburner", pi_afterburner.value)?;
        finite("pi_mixer", pi_mixer.value)?;
        positive(
            "turbine_inlet_temperature",
            turbine_inlet_temperature.get::<kelvin>(),
        )?;
        positive(
            "afterburner_exit_temperature",
            afterburner_exit_temperature.get::<kelvin>(),
        )?;
        finite(
            "turbojet_compressor_pressure_ratio",
            turbojet_compressor_pressure_ratio.value,
        )?;
        let bypass_ratio = check_finite(bypass_ratio.value)
            .and_then(|()| NonNegative::new(bypass_ratio))
            .map_err(|source| ParameterError::Invalid {
                field: "bypass_ratio",
                source,
            })?;
        finite("fan_pressure_ratio", fan_pressure_ratio.value)?;
        finite(
            "turbofan_compressor_pressure_ratio",
            turbofan_compressor_pressure_ratio.value,
        )?;

        Ok(GasAndFlightParameters {
            air,
            gas,
            air_gas_constant: r_air,
            fuel_heating_value,
            flight: FlightCondition {
                mach,
                ambient_temperature,
                ambient_pressure,
            },
            efficiencies,
            losses: LossRatios {
                combustor: pi_combustor,
                afterburner: pi_afterburner,
                mixer: pi_mixer,
            },
            limits: TemperatureLimits {
                turbine_inlet: turbine_inlet_temperature,
                afterburner_exit: afterburner_exit_temperature,
            },
            turbojet: TurbojetDesign {
                compressor_pressure_ratio: turbojet_compressor_pressure_ratio,
            },
            turbofan: TurbofanDesign {
                bypass_ratio,
                fan_pressure_ratio,
                compressor_pressure_ratio: turbofan_compressor_pressure_ratio,
            },
        })
    }
}

fn perfect_gas(
    gamma_field: &'static str,
    cp_field: &'static str,
    gamma: Ratio,
    cp: SpecificHeatCapacity,
) -> Result<PerfectGas, ParameterError> {
    PerfectGas::new(gamma, cp).map_err(|err| match err {
        GasError::HeatCapacityRatio { source, .. } => ParameterError::Invalid {
            field: gamma_field,
            source,
        },
        GasError::Cp { source, .. } => ParameterError::Invalid {
            field: cp_field,
            source,
        },
    })
}

fn positive(field: &'static str, value: f64) -> Result<(), ParameterError> {
    check_finite(value)
        .and_then(|()| StrictlyPositive::check(&value))
        .map_err(|source| ParameterError::Invalid { field, source })
}

fn efficiency(field: &'static str, value: Ratio) -> Result<Efficiency, ParameterError> {
    check_finite(value.value)
        .and_then(|()| StrictlyPositive::new(value))
        .map_err(|source| ParameterError::Invalid { field, source })
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ParameterError> {
    check_finite(value)
        .and_then(|()| NonNegative::check(&value))
        .map_err(|source| ParameterError::Invalid { field, source })
}

fn finite(field: &'static str, value: f64) -> Result<(), ParameterError> {
    check_finite(value).map_err(|source| ParameterError::Invalid { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_utils::design_point;
    use uom::si::ratio::ratio;

    #[test]
    fn empty_builder_lists_every_field() {
        let err = ParametersBuilder::new().build().unwrap_err();
        let ParameterError::NotReady { missing } = err else {
            panic!("expected NotReady, got {err:?}");
        };
        assert_eq!(missing.len(), 25);
        assert_eq!(missing.first(), Some(&"gamma_air"));
        assert_eq!(missing.last(), Some(&"turbofan_compressor_pressure_ratio"));
    }

    #[test]
    fn missing_fields_keep_declaration_order() {
        let mut builder = design_point();
        builder.pi_mixer = None;
        builder.cp_air = None;

        assert_eq!(
            builder.build(),
            Err(ParameterError::NotReady {
                missing: vec!["cp_air", "pi_mixer"]
            })
        );
    }

    #[test]
    fn complete_builder_builds() {
        let params = design_point().build().unwrap();
        assert_eq!(params.air().gamma().get::<ratio>(), 1.4);
        assert_eq!(params.turbofan().bypass_ratio.into_inner().get::<ratio>(), 1.0);
        assert_eq!(params.main_burner().exit_temperature, params.limits().turbine_inlet);
        assert_eq!(params.afterburner().pressure_ratio, params.losses().afterburner);
    }

    #[test]
    fn efficiencies_keep_their_values() {
        let params = design_point().build().unwrap();
        let eta = params.efficiencies();
        assert_eq!(eta.turbine.into_inner().get::<ratio>(), 0.92);
        assert_eq!(eta.inlet.as_ref().get::<ratio>(), 0.98);

        let infinite = design_point().eta_fan(Ratio::new::<ratio>(f64::INFINITY));
        assert_eq!(
            infinite.build(),
            Err(ParameterError::Invalid {
                field: "eta_fan",
                source: ConstraintError::NotFinite,
            })
        );
    }

    #[test]
    fn gamma_at_one_is_rejected() {
        let builder = design_point().gamma_gas(Ratio::new::<ratio>(1.0));
        assert_eq!(
            builder.build(),
            Err(ParameterError::Invalid {
                field: "gamma_gas",
                source: ConstraintError::BelowMinimum,
            })
        );
    }

    #[test]
    fn range_checks() {
        let zero_efficiency = design_point().eta_nozzle(Ratio::new::<ratio>(0.0));
        assert_eq!(
            zero_efficiency.build(),
            Err(ParameterError::Invalid {
                field: "eta_nozzle",
                source: ConstraintError::Zero,
            })
        );

        let negative_bypass = design_point().bypass_ratio(Ratio::new::<ratio>(-0.1));
        assert_eq!(
            negative_bypass.build(),
            Err(ParameterError::Invalid {
                field: "bypass_ratio",
                source: ConstraintError::Negative,
            })
        );

        let nan_pressure_ratio = design_point().pi_mixer(Ratio::new::<ratio>(f64::NAN));
        assert_eq!(
            nan_pressure_ratio.build(),
            Err(ParameterError::Invalid {
                field: "pi_mixer",
                source: ConstraintError::NotANumber,
            })
        );
    }

    #[test]
    fn zero_mach_and_bypass_are_allowed() {
        let builder = design_point()
            .mach(Ratio::new::<ratio>(0.0))
            .bypass_ratio(Ratio::new::<ratio>(0.0));
        assert!(builder.build().is_ok());
    }

    #[test]
    fn not_ready_message_names_fields() {
        let mut builder = design_point();
        builder.r_air = None;
        let message = builder.build().unwrap_err().to_string();
        assert_eq!(message, "parameters are not ready, missing: r_air");
    }
}
