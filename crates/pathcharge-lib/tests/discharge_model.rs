mod common;

use pathcharge_lib::{predict_level, DischargeConfig, DischargeModel, Error};

use common::default_model;

#[test]
fn zero_distance_is_identity_across_valid_levels() {
    let model = default_model();
    for tenth in 1..1000 {
        let level = f64::from(tenth) / 10.0;
        let projected = model.predict(level, 0.0).expect("valid level");
        assert!(
            (projected - level).abs() < 1e-9,
            "predict({level}, 0) = {projected}"
        );
    }
}

#[test]
fn strictly_decreasing_in_distance() {
    let model = default_model();
    for level in [5.0, 25.0, 50.0, 90.0, 99.5, 99.995] {
        let mut previous = model.predict(level, 0.0).unwrap();
        for meters in 1..=200 {
            let projected = model.predict(level, f64::from(meters)).unwrap();
            assert!(
                projected < previous,
                "level {level}: {meters} m gave {projected} >= {previous}"
            );
            previous = projected;
        }
    }
}

#[test]
fn strictly_increasing_in_level() {
    let model = default_model();
    for distance in [0.5, 10.0, 100.0, 400.0] {
        let mut previous = model.predict(0.5, distance).unwrap();
        for level in 1..100 {
            let projected = model.predict(f64::from(level), distance).unwrap();
            assert!(
                projected > previous,
                "distance {distance}: level {level} gave {projected} <= {previous}"
            );
            previous = projected;
        }
    }
}

#[test]
fn levels_within_floor_of_ceiling_sit_before_curve_origin() {
    // above max - min the inverted time is negative; the curve still holds there
    let model = default_model();
    let level = 99.995;

    let elapsed = model.elapsed_runtime(level).unwrap();
    assert!(elapsed < 0.0, "elapsed runtime {elapsed} should be negative");
    assert!((model.predict(level, 0.0).unwrap() - level).abs() < 1e-9);

    let near_ceiling = model.predict(level, 400.0).unwrap();
    let below_band = model.predict(99.5, 400.0).unwrap();
    assert!(near_ceiling > below_band);
    assert!(near_ceiling < level);
}

#[test]
fn full_battery_is_a_precondition_violation() {
    let model = default_model();
    for distance in [0.0, 1.0, 1000.0] {
        match model.predict(100.0, distance) {
            Err(Error::InvalidBatteryLevel { level, ceiling }) => {
                assert_eq!(level, 100.0);
                assert_eq!(ceiling, 100.0);
            }
            other => panic!("expected InvalidBatteryLevel, got {other:?}"),
        }
    }
}

#[test]
fn faster_robot_drains_less_per_meter() {
    let slow = DischargeConfig::default();
    let fast = DischargeConfig {
        speed_mps: 1.0,
        ..DischargeConfig::default()
    };

    let slow_level = predict_level(80.0, 50.0, &slow).unwrap();
    let fast_level = predict_level(80.0, 50.0, &fast).unwrap();
    assert!(fast_level > slow_level);
}

#[test]
fn custom_ceiling_moves_the_precondition() {
    let config = DischargeConfig {
        max_charge_ceiling: 80.0,
        ..DischargeConfig::default()
    };
    let model = DischargeModel::new(config).unwrap();

    assert!(model.predict(79.0, 10.0).is_ok());
    assert!(matches!(
        model.predict(80.0, 10.0),
        Err(Error::InvalidBatteryLevel { ceiling, .. }) if ceiling == 80.0
    ));
}

#[test]
fn maximum_distance_scales_with_speed() {
    let base = default_model();
    let doubled = DischargeModel::new(DischargeConfig {
        speed_mps: 0.52,
        ..DischargeConfig::default()
    })
    .unwrap();

    let base_range = base.maximum_distance(60.0).unwrap();
    let doubled_range = doubled.maximum_distance(60.0).unwrap();
    assert!((doubled_range - 2.0 * base_range).abs() < 1e-9);
    assert!(base.remaining_runtime(60.0).unwrap() > base.remaining_runtime(30.0).unwrap());
}
