mod common;

use jetcycle_cycles::{CycleEngine, Event, Stage, Station, Turbofan, Turbojet};

use common::{design_point, heating_value};

#[test]
fn observing_does_not_change_results() {
    let params = design_point().build().unwrap();

    let mut events = Vec::new();
    let observed = Turbofan.run(&params, |event: &Event| events.push(event.clone()));

    assert_eq!(observed, Turbofan.analyze(&params));
    assert!(matches!(events.last(), Some(Event::Performance { .. })));
}

#[test]
fn station_events_carry_burner_fuel() {
    let params = design_point().build().unwrap();

    let mut burners = Vec::new();
    let results = Turbojet.run(&params, |event: &Event| {
        if let Event::Station {
            stage,
            station,
            fuel_air_ratio: Some(f),
            ..
        } = event
        {
            burners.push((*stage, *station, *f));
        }
    });

    assert_eq!(
        burners,
        vec![
            (
                Stage::Combustor,
                Station::TurbineInlet,
                results.combustor_fuel_air_ratio
            ),
            (
                Stage::Afterburner,
                Station::AfterburnerExit,
                results.afterburner_fuel_air_ratio
            ),
        ]
    );
}

#[test]
fn degeneracies_are_reported_as_they_fire() {
    let params = design_point()
        .fuel_heating_value(heating_value(1.0e6))
        .build()
        .unwrap();

    let mut reported = Vec::new();
    let results = Turbojet.run(&params, |event: &Event| {
        if let Event::Degenerate(degeneracy) = event {
            reported.push(*degeneracy);
        }
    });

    assert_eq!(reported, results.degeneracies);
}
