//! Free-fall loop validation
//!
//! Checks the kinematics layer against a hand-stepped reference, against the
//! closed-form projectile solution at small time steps, and the JSON config path.
//!
//! Run tests with: `cargo test --test free_fall_validation`

use approx::assert_relative_eq;
use freefall_core::{
    ConfigError, FreeFallSimulation, PhysicalObject, Point, SimulationConfig, SimulationError,
    Vector,
};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn thrown_ball() -> PhysicalObject {
    PhysicalObject::new(5.0, Point::new(0.0, 50.0, 0.0), Vector::new(30.0, 10.0, 0.0)).unwrap()
}

/// With a one-second step the loop is exactly "move by velocity, then add gravity"
#[test]
fn test_unit_step_matches_hand_stepped_object() {
    let gravity = Vector::new(0.0, -9.81, 0.0);
    let mut reference = thrown_ball();
    let mut positions = vec![reference.position()];
    while reference.position().y() > 0.0 {
        reference.move_position();
        reference.update_velocity(&gravity);
        positions.push(reference.position());
    }

    let mut sim = FreeFallSimulation::new(thrown_ball(), SimulationConfig::default()).unwrap();
    let trajectory = sim.run();

    assert_eq!(trajectory.samples.len(), positions.len());
    for (sample, expected) in trajectory.samples.iter().zip(&positions) {
        assert_eq!(sample.position, *expected);
    }
    assert_eq!(sim.object().velocity(), reference.velocity());
}

#[test]
fn test_ticks_are_sequential() {
    let mut sim = FreeFallSimulation::new(thrown_ball(), SimulationConfig::default()).unwrap();
    let trajectory = sim.run();
    for (expected, sample) in trajectory.samples.iter().enumerate() {
        assert_eq!(sample.tick, expected as u64);
    }
    assert_eq!(trajectory.ticks, sim.tick());
}

/// Landing time converges on the analytic projectile solution
///
/// y(t) = 50 + 10t - 9.81t²/2 = 0  =>  t = (10 + sqrt(100 + 2·9.81·50)) / 9.81
#[test]
fn test_small_step_landing_time_matches_closed_form() {
    let config = SimulationConfig {
        timestep: 0.001,
        ..Default::default()
    };
    let mut sim = FreeFallSimulation::new(thrown_ball(), config).unwrap();
    let trajectory = sim.run();
    assert!(trajectory.landed);

    let analytic = (10.0 + (100.0_f64 + 2.0 * 9.81 * 50.0).sqrt()) / 9.81;
    assert_relative_eq!(sim.elapsed_time(), analytic, epsilon = 0.01);

    // Horizontal motion is unaffected by gravity
    let last = trajectory.final_position().unwrap();
    assert_relative_eq!(last.x(), 30.0 * sim.elapsed_time(), epsilon = 1e-6);
    assert_relative_eq!(trajectory.apex_height().unwrap(), 50.0 + 100.0 / (2.0 * 9.81), epsilon = 0.01);
}

#[test]
fn test_heavier_object_falls_the_same_under_gravity_alone() {
    let light = PhysicalObject::new(0.1, Point::new(0.0, 20.0, 0.0), Vector::ZERO).unwrap();
    let heavy = PhysicalObject::new(100.0, Point::new(0.0, 20.0, 0.0), Vector::ZERO).unwrap();

    let a = FreeFallSimulation::new(light, SimulationConfig::default()).unwrap().run();
    let b = FreeFallSimulation::new(heavy, SimulationConfig::default()).unwrap().run();
    assert_eq!(a.ticks, b.ticks);
    assert_eq!(a.final_position(), b.final_position());
}

#[test]
fn test_applied_force_counteracting_gravity_hovers() {
    let mass = 2.0;
    let config = SimulationConfig {
        applied_force: Vector::new(0.0, 9.81 * mass, 0.0),
        max_ticks: 50,
        ..Default::default()
    };
    let object = PhysicalObject::new(mass, Point::new(0.0, 5.0, 0.0), Vector::ZERO).unwrap();
    let mut sim = FreeFallSimulation::new(object, config).unwrap();
    let trajectory = sim.run();

    assert!(!trajectory.landed);
    assert_eq!(trajectory.ticks, 50);
    assert_relative_eq!(sim.object().position().y(), 5.0, epsilon = 1e-9);
}

#[test]
fn test_config_file_round_trip_through_disk() {
    let path = std::env::temp_dir().join(format!("freefall-config-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{ "timestep": 0.5, "gravity": [0.0, -1.62, 0.0], "max_ticks": 400 }"#,
    )
    .unwrap();

    let config = SimulationConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.timestep, 0.5);
    assert_eq!(config.max_ticks, 400);
    assert_eq!(config.gravity, Vector::new(0.0, -1.62, 0.0));
}

#[test]
fn test_invalid_config_is_rejected_before_running() {
    let config = SimulationConfig {
        timestep: -0.1,
        ..Default::default()
    };
    let err = FreeFallSimulation::new(thrown_ball(), config).unwrap_err();
    assert_eq!(err, SimulationError::Config(ConfigError::InvalidTimestep(-0.1)));
    assert!(err.to_string().contains("-0.1"));
}
