use std::env;

use jetcycle_core::Observer;
use jetcycle_cycles::{EngineKind, Event};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use uom::si::{pressure::pascal, ratio::ratio, thermodynamic_temperature::kelvin};

/// Installs a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` the level is `info`, or `debug` when `verbose` is set so
/// that every station is logged.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Whether `--verbose` (or `-v`) was passed on the command line.
#[must_use]
pub fn verbose_requested() -> bool {
    env::args().skip(1).any(|arg| arg == "--verbose" || arg == "-v")
}

/// Forwards engine events to `tracing`.
#[derive(Debug, Clone, Copy)]
pub struct TracingObserver {
    engine: EngineKind,
}

impl TracingObserver {
    #[must_use]
    pub fn new(engine: EngineKind) -> Self {
        Self { engine }
    }
}

impl Observer<Event> for TracingObserver {
    fn observe(&mut self, event: &Event) {
        match event {
            Event::Station {
                stage,
                station,
                state,
                fuel_air_ratio,
            } => debug!(
                engine = %self.engine,
                %stage,
                station = station.label(),
                temperature_k = state.temperature.get::<kelvin>(),
                pressure_pa = state.pressure.get::<pascal>(),
                fuel_air_ratio = fuel_air_ratio.map(|f| f.get::<ratio>()),
                "station"
            ),
            Event::Degenerate(degeneracy) => {
                warn!(engine = %self.engine, "{degeneracy}");
            }
            Event::Performance {
                specific_thrust,
                tsfc,
            } => info!(
                engine = %self.engine,
                specific_thrust = specific_thrust.value,
                tsfc_mg_per_newton_second = tsfc.value * 1e6,
                "performance"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jetcycle_cycles::{CycleEngine, Turbofan};

    use crate::config::{design_point_path, load_parameters};

    #[test]
    fn logging_leaves_results_alone() {
        let params = load_parameters(design_point_path()).unwrap();
        let logged = Turbofan.run(&params, TracingObserver::new(EngineKind::Turbofan));
        assert_eq!(logged, Turbofan.analyze(&params));
    }
}
