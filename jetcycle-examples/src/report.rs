//! Plain-text rendering of engine results.

use std::fmt;

use jetcycle_cycles::ResultsRecord;
use uom::si::{
    available_energy::kilojoule_per_kilogram, pressure::kilopascal, ratio::ratio,
    thermodynamic_temperature::kelvin, velocity::meter_per_second,
};

/// Displays a [`ResultsRecord`] as a station table and performance summary.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a>(pub &'a ResultsRecord);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let results = self.0;

        writeln!(f, "{}", results.engine)?;
        writeln!(f, "  {:>7}  {:>10}  {:>10}", "station", "T [K]", "P [kPa]")?;
        for (station, state) in results.stations.iter() {
            writeln!(
                f,
                "  {:>7}  {:>10.2}  {:>10.3}",
                station.label(),
                state.temperature.get::<kelvin>(),
                state.pressure.get::<kilopascal>(),
            )?;
        }

        writeln!(
            f,
            "  flight velocity      {:>10.2} m/s",
            results.flight_velocity.get::<meter_per_second>()
        )?;
        writeln!(
            f,
            "  exit velocity        {:>10.2} m/s",
            results.exit_velocity.get::<meter_per_second>()
        )?;
        if let Some(fan_work) = results.fan_work {
            writeln!(
                f,
                "  fan work             {:>10.2} kJ/kg",
                fan_work.get::<kilojoule_per_kilogram>()
            )?;
        }
        writeln!(
            f,
            "  compressor work      {:>10.2} kJ/kg",
            results.compressor_work.get::<kilojoule_per_kilogram>()
        )?;
        writeln!(
            f,
            "  f combustor          {:>10.5}",
            results.combustor_fuel_air_ratio.get::<ratio>()
        )?;
        writeln!(
            f,
            "  f afterburner        {:>10.5}",
            results.afterburner_fuel_air_ratio.get::<ratio>()
        )?;
        writeln!(
            f,
            "  f overall            {:>10.5}",
            results.overall_fuel_air_ratio.get::<ratio>()
        )?;
        writeln!(
            f,
            "  specific thrust      {:>10.2} N/(kg/s)",
            results.specific_thrust.get::<meter_per_second>()
        )?;
        write!(
            f,
            "  TSFC                 {:>10.2} mg/(N·s)",
            results.tsfc_mg_per_newton_second()
        )?;

        for degeneracy in &results.degeneracies {
            write!(f, "\n  warning: {degeneracy}")?;
        }
        Ok(())
    }
}
