//! # Turbine Inlet Temperature Sweep
//!
//! Raises the turbine inlet temperature `T_t4` from 1500 K to 1800 K with the
//! afterburner exit temperature held fixed, and tabulates fuel-air ratio,
//! specific thrust, and TSFC for both engines.
//!
//! The turbojet gains thrust as `T_t4` rises. The turbofan barely moves: its
//! afterburner reheats the mixed stream to the same `T_t7` regardless, so the
//! hotter core only shifts fuel from the afterburner to the main combustor.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example turbine_inlet_sweep
//! ```

use anyhow::Context;
use jetcycle_cycles::{CycleEngine, ResultsRecord, Turbofan, Turbojet};
use jetcycle_examples::{
    config::{design_point_path, load_builder},
    init_tracing, verbose_requested,
};
use tracing::{info, warn};
use uom::si::{
    f64::ThermodynamicTemperature, ratio::ratio, thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

fn row(t4: f64, results: &ResultsRecord) -> String {
    format!(
        "{:>8.0}  {:<9}  {:>9.5}  {:>10.2}  {:>8.2}",
        t4,
        results.engine.to_string(),
        results.combustor_fuel_air_ratio.get::<ratio>(),
        results.specific_thrust.get::<meter_per_second>(),
        results.tsfc_mg_per_newton_second(),
    )
}

fn main() -> anyhow::Result<()> {
    init_tracing(verbose_requested());

    let path = design_point_path();
    let builder = load_builder(&path)
        .with_context(|| format!("cannot read the sweep baseline `{}`", path.display()))?;

    println!(
        "{:>8}  {:<9}  {:>9}  {:>10}  {:>8}",
        "T_t4 [K]", "engine", "f_comb", "F_s", "TSFC"
    );

    for t4 in (1500..=1800).step_by(50).map(f64::from) {
        let params = builder
            .clone()
            .turbine_inlet_temperature(ThermodynamicTemperature::new::<kelvin>(t4))
            .build()
            .with_context(|| format!("invalid parameters at T_t4 = {t4} K"))?;

        for results in [Turbojet.analyze(&params), Turbofan.analyze(&params)] {
            if results.is_suspect() {
                warn!(t4, engine = %results.engine, "degenerate run: {:?}", results.degeneracies);
            }
            println!("{}", row(t4, &results));
        }
    }

    info!("sweep complete");
    Ok(())
}
