//! Work-balance turbine model.
//!
//! The turbine drives its spool, so its temperature drop is fixed by the
//! shaft work it must deliver rather than by a pressure ratio:
//!
//! ```text
//! T_out = T_in − w_shaft / (m·cp)
//! ```
//!
//! where `m` is the gas mass flowing through the turbine per unit of core air
//! (`1 + f` with the combustor fuel). The isentropic efficiency enters only
//! through the pressure drop, via the ideal exit temperature
//! `T_s = T_in − (T_in − T_out)/η` and `P_out = P_in·(T_s/T_in)^(γ/(γ-1))`.

use jetcycle_thermo::{PerfectGas, StagnationState, guard, units::SpecificWork};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::turbomachinery::turbine::ExpansionResult;

/// Computes the turbine exit state that delivers `shaft_work`.
///
/// `mass_ratio` is the turbine gas flow per unit of core air and `eta` the
/// isentropic efficiency, which must be non-zero.
#[must_use]
pub fn work_balance(
    inlet: &StagnationState,
    shaft_work: SpecificWork,
    mass_ratio: Ratio,
    eta: Ratio,
    gas: &PerfectGas,
) -> ExpansionResult {
    let t_in = inlet.temperature.get::<kelvin>();
    let p_in = inlet.pressure.get::<pascal>();
    let cp = gas.cp().get::<joule_per_kilogram_kelvin>();

    let heat_capacity_rate = guard::positive_denominator(mass_ratio.get::<ratio>() * cp);
    let t_out = t_in - shaft_work.get::<joule_per_kilogram>() / heat_capacity_rate.value();
    let t_ideal = t_in - (t_in - t_out) / eta.get::<ratio>();

    let pressure_ratio = gas.isentropic_pressure_ratio(Ratio::new::<ratio>(t_ideal / t_in));

    ExpansionResult {
        outlet: StagnationState::new(
            ThermodynamicTemperature::new::<kelvin>(t_out),
            Pressure::new::<pascal>(p_in * pressure_ratio.value()),
        ),
        ideal_temperature: ThermodynamicTemperature::new::<kelvin>(t_ideal),
        mass_flow_clamped: heat_capacity_rate.is_clamped(),
        power_base_clamped: pressure_ratio.is_clamped(),
    }
}
