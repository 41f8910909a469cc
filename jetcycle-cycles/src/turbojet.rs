use std::convert::Infallible;

use jetcycle_components::{
    combustion, inlet, nozzle,
    turbomachinery::{compressor, turbine},
};
use jetcycle_core::{Model, Observer};
use uom::si::{f64::Ratio, ratio::ratio};

use crate::{
    engine::{CycleEngine, EngineKind, Pipeline},
    event::{Degeneracy, Event},
    parameters::GasAndFlightParameters,
    performance::{self, MassFlows},
    results::ResultsRecord,
    station::{Stage, Station},
};

/// Single-spool afterburning turbojet.
///
/// Stations 0, 2, 3, 4, 5, 7, 9. The turbine drives the compressor alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Turbojet;

impl CycleEngine for Turbojet {
    fn kind(&self) -> EngineKind {
        EngineKind::Turbojet
    }

    fn run<O: Observer<Event>>(
        &self,
        parameters: &GasAndFlightParameters,
        observer: O,
    ) -> ResultsRecord {
        let mut pipeline = Pipeline::new(observer);
        let air = parameters.air();
        let gas = parameters.gas();
        let eta = parameters.efficiencies();

        let inlet = inlet::diffuse(
            parameters.flight(),
            air,
            parameters.air_gas_constant(),
            eta.inlet.into_inner(),
        );
        pipeline.station(Stage::Inlet, Station::Freestream, inlet.freestream, None);
        pipeline.station(Stage::Inlet, Station::InletExit, inlet.outlet, None);

        let compressor = compressor::isentropic(
            &inlet.outlet,
            parameters.turbojet().compressor_pressure_ratio,
            eta.compressor.into_inner(),
            air,
        );
        pipeline.station(
            Stage::Compressor,
            Station::CompressorExit,
            compressor.outlet,
            None,
        );
        pipeline.flag(
            compressor.power_base_clamped,
            Degeneracy::NonPositivePowerBase {
                stage: Stage::Compressor,
            },
        );

        let combustor = combustion::burn(
            &compressor.outlet,
            air.cp(),
            gas,
            &parameters.main_burner(),
        );
        pipeline.station(
            Stage::Combustor,
            Station::TurbineInlet,
            combustor.outlet,
            Some(combustor.fuel_air_ratio),
        );
        pipeline.flag(
            combustor.denominator_clamped,
            Degeneracy::FuelAirDenominator {
                stage: Stage::Combustor,
            },
        );

        let f_comb = combustor.fuel_air_ratio.get::<ratio>();
        let turbine = turbine::work_balance(
            &combustor.outlet,
            compressor.work,
            Ratio::new::<ratio>(1.0 + f_comb),
            eta.turbine.into_inner(),
            gas,
        );
        pipeline.station(Stage::Turbine, Station::TurbineExit, turbine.outlet, None);
        pipeline.flag(
            turbine.mass_flow_clamped,
            Degeneracy::NonPositiveMassFlow {
                stage: Stage::Turbine,
            },
        );
        pipeline.flag(
            turbine.power_base_clamped,
            Degeneracy::NonPositivePowerBase {
                stage: Stage::Turbine,
            },
        );

        let afterburner = combustion::burn(
            &turbine.outlet,
            gas.cp(),
            gas,
            &parameters.afterburner(),
        );
        pipeline.station(
            Stage::Afterburner,
            Station::AfterburnerExit,
            afterburner.outlet,
            Some(afterburner.fuel_air_ratio),
        );
        pipeline.flag(
            afterburner.denominator_clamped,
            Degeneracy::FuelAirDenominator {
                stage: Stage::Afterburner,
            },
        );

        let nozzle = nozzle::expand(
            &afterburner.outlet,
            parameters.flight().ambient_pressure,
            eta.nozzle.into_inner(),
            gas,
        );
        pipeline.station(Stage::Nozzle, Station::NozzleExit, nozzle.outlet, None);
        pipeline.flag(nozzle.pressure_floored, Degeneracy::NozzlePressureFloor);
        pipeline.flag(
            nozzle.power_base_clamped,
            Degeneracy::NonPositivePowerBase {
                stage: Stage::Nozzle,
            },
        );

        // Afterburner fuel is per unit of turbine exit flow, 1 + f_comb.
        let f_ab = afterburner.fuel_air_ratio.get::<ratio>();
        let fuel = f_comb + (1.0 + f_comb) * f_ab;
        let flows = MassFlows {
            inlet_air: Ratio::new::<ratio>(1.0),
            fuel: Ratio::new::<ratio>(fuel),
            exit: Ratio::new::<ratio>(1.0 + fuel),
        };
        let performance = performance::reduce(&flows, inlet.flight_velocity, nozzle.exit_velocity);
        pipeline.performance(&performance);

        let (stations, degeneracies) = pipeline.finish();
        ResultsRecord {
            engine: EngineKind::Turbojet,
            stations,
            flight_velocity: inlet.flight_velocity,
            exit_velocity: nozzle.exit_velocity,
            compressor_work: compressor.work,
            fan_work: None,
            shaft_work: compressor.work,
            combustor_fuel_air_ratio: combustor.fuel_air_ratio,
            afterburner_fuel_air_ratio: afterburner.fuel_air_ratio,
            overall_fuel_air_ratio: performance.overall_fuel_air_ratio,
            specific_thrust: performance.specific_thrust,
            tsfc: performance.tsfc,
            degeneracies,
        }
    }
}

impl Model for Turbojet {
    type Input = GasAndFlightParameters;
    type Output = ResultsRecord;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.analyze(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::joule_per_kilogram, pressure::pascal,
        specific_heat_capacity::joule_per_kilogram_kelvin, thermodynamic_temperature::kelvin,
        velocity::meter_per_second,
    };

    use crate::test_utils::{design_point, ratio_of};

    #[test]
    fn design_point_stations() {
        let params = design_point().build().unwrap();
        let results = Turbojet.analyze(&params);

        let inlet_exit = results.station(Station::InletExit).unwrap();
        assert_relative_eq!(inlet_exit.temperature.get::<kelvin>(), 248.013, epsilon = 1e-3);
        assert_relative_eq!(inlet_exit.pressure.get::<pascal>(), 35_571.67, epsilon = 0.1);

        let compressor_exit = results.station(Station::CompressorExit).unwrap();
        assert_relative_eq!(compressor_exit.temperature.get::<kelvin>(), 700.67, epsilon = 0.01);
        assert_relative_eq!(
            results.compressor_work.get::<joule_per_kilogram>(),
            454_920.0,
            max_relative = 1e-4
        );

        let turbine_exit = results.station(Station::TurbineExit).unwrap();
        assert_relative_eq!(turbine_exit.temperature.get::<kelvin>(), 1315.51, epsilon = 0.01);
        assert_relative_eq!(turbine_exit.pressure.get::<pascal>(), 331_119.0, max_relative = 1e-4);

        assert_relative_eq!(
            results.combustor_fuel_air_ratio.get::<ratio>(),
            0.030636,
            max_relative = 1e-4
        );
        assert_relative_eq!(
            results.afterburner_fuel_air_ratio.get::<ratio>(),
            0.019888,
            max_relative = 1e-4
        );
        assert_relative_eq!(
            results.exit_velocity.get::<meter_per_second>(),
            1470.43,
            epsilon = 0.01
        );
        assert_relative_eq!(
            results.specific_thrust.get::<meter_per_second>(),
            1294.80,
            epsilon = 0.01
        );
        assert_relative_eq!(results.tsfc_mg_per_newton_second(), 39.49, epsilon = 0.01);
        assert!(!results.is_suspect());
        assert_eq!(results.fan_work, None);
    }

    #[test]
    fn records_turbojet_stations_only() {
        let results = Turbojet.analyze(&design_point().build().unwrap());
        assert_eq!(
            results.stations.stations().collect::<Vec<_>>(),
            vec![
                Station::Freestream,
                Station::InletExit,
                Station::CompressorExit,
                Station::TurbineInlet,
                Station::TurbineExit,
                Station::AfterburnerExit,
                Station::NozzleExit,
            ]
        );
    }

    #[test]
    fn turbine_balances_compressor_work() {
        let params = design_point().build().unwrap();
        let results = Turbojet.analyze(&params);

        let t4 = results.station(Station::TurbineInlet).unwrap().temperature;
        let t5 = results.station(Station::TurbineExit).unwrap().temperature;
        let cp_gas = params.gas().cp().get::<joule_per_kilogram_kelvin>();
        let f_comb = results.combustor_fuel_air_ratio.get::<ratio>();

        let turbine_work = cp_gas * (t4.get::<kelvin>() - t5.get::<kelvin>()) * (1.0 + f_comb);
        assert_relative_eq!(
            turbine_work,
            results.compressor_work.get::<joule_per_kilogram>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn static_engine_has_zero_flight_velocity() {
        let params = design_point().mach(ratio_of(0.0)).build().unwrap();
        let results = Turbojet.analyze(&params);

        assert_eq!(results.flight_velocity.get::<meter_per_second>(), 0.0);
        let inlet_exit = results.station(Station::InletExit).unwrap();
        assert_relative_eq!(inlet_exit.temperature.get::<kelvin>(), 216.7);
    }

    #[test]
    fn observer_sees_each_station_once() {
        let params = design_point().build().unwrap();
        let mut stations = Vec::new();
        let observed = Turbojet.run(&params, |event: &Event| {
            if let Event::Station { station, .. } = event {
                stations.push(*station);
            }
        });

        assert_eq!(stations, observed.stations.stations().collect::<Vec<_>>());
        assert_eq!(observed, Turbojet.analyze(&params));
    }

    #[test]
    fn model_call_matches_analyze() {
        let params = design_point().build().unwrap();
        let Ok(results) = Turbojet.call(&params);
        assert_eq!(results, Turbojet.analyze(&params));
        assert_eq!(Turbojet.kind(), EngineKind::Turbojet);
    }
}
