use std::convert::Infallible;

use jetcycle_components::{
    combustion, inlet,
    mixer::{self, MixerInlet},
    nozzle,
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

/// Two-stream afterburning turbofan with a mixed exhaust.
///
/// The fan compresses all inlet air; the bypass stream then rejoins the core
/// in a mixer ahead of a shared afterburner and nozzle. A single turbine
/// drives both the fan and the core compressor.
///
/// Mass flows are tracked per unit core air, with `BPR` units of bypass air.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Turbofan;

impl CycleEngine for Turbofan {
    fn kind(&self) -> EngineKind {
        EngineKind::Turbofan
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
        let design = parameters.turbofan();
        let bypass = design.bypass_ratio.into_inner();
        let bypass_ratio = bypass.get::<ratio>();

        let inlet = inlet::diffuse(
            parameters.flight(),
            air,
            parameters.air_gas_constant(),
            eta.inlet.into_inner(),
        );
        pipeline.station(Stage::Inlet, Station::Freestream, inlet.freestream, None);
        pipeline.station(Stage::Inlet, Station::InletExit, inlet.outlet, None);

        let fan = compressor::isentropic(
            &inlet.outlet,
            design.fan_pressure_ratio,
            eta.fan.into_inner(),
            air,
        );
        pipeline.station(Stage::Fan, Station::FanExit, fan.outlet, None);
        pipeline.station(Stage::Fan, Station::CoreInlet, fan.outlet, None);
        pipeline.flag(
            fan.power_base_clamped,
            Degeneracy::NonPositivePowerBase { stage: Stage::Fan },
        );

        let compressor = compressor::isentropic(
            &fan.outlet,
            design.compressor_pressure_ratio,
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

        // The fan works on core and bypass air alike.
        let shaft_work = fan.work * (1.0 + bypass_ratio) + compressor.work;
        let f_comb = combustor.fuel_air_ratio.get::<ratio>();
        let core_flow = Ratio::new::<ratio>(1.0 + f_comb);
        let turbine = turbine::work_balance(
            &combustor.outlet,
            shaft_work,
            core_flow,
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

        let mixer = mixer::mix(
            &MixerInlet {
                state: fan.outlet,
                mass_ratio: bypass,
                cp: air.cp(),
            },
            &MixerInlet {
                state: turbine.outlet,
                mass_ratio: core_flow,
                cp: gas.cp(),
            },
            gas,
            parameters.losses().mixer,
        );
        pipeline.station(Stage::Mixer, Station::MixerExit, mixer.outlet, None);
        pipeline.flag(
            mixer.mass_flow_clamped,
            Degeneracy::NonPositiveMassFlow { stage: Stage::Mixer },
        );

        let afterburner = combustion::burn(&mixer.outlet, gas.cp(), gas, &parameters.afterburner());
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

        let mixed_flow = mixer.mass_ratio.get::<ratio>();
        let afterburner_fuel = mixed_flow * afterburner.fuel_air_ratio.get::<ratio>();
        let flows = MassFlows {
            inlet_air: Ratio::new::<ratio>(1.0 + bypass_ratio),
            fuel: Ratio::new::<ratio>(f_comb + afterburner_fuel),
            exit: Ratio::new::<ratio>(mixed_flow + afterburner_fuel),
        };
        let performance = performance::reduce(&flows, inlet.flight_velocity, nozzle.exit_velocity);
        pipeline.performance(&performance);

        let (stations, degeneracies) = pipeline.finish();
        ResultsRecord {
            engine: EngineKind::Turbofan,
            stations,
            flight_velocity: inlet.flight_velocity,
            exit_velocity: nozzle.exit_velocity,
            compressor_work: compressor.work,
            fan_work: Some(fan.work),
            shaft_work,
            combustor_fuel_air_ratio: combustor.fuel_air_ratio,
            afterburner_fuel_air_ratio: afterburner.fuel_air_ratio,
            overall_fuel_air_ratio: performance.overall_fuel_air_ratio,
            specific_thrust: performance.specific_thrust,
            tsfc: performance.tsfc,
            degeneracies,
        }
    }
}

impl Model for Turbofan {
    type Input = GasAndFlightParameters;
    type Output = ResultsRecord;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.analyze(input))
    }
}
