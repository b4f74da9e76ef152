mod common;

use approx::assert_relative_eq;
use fly::components::{FlightDynamicsModel, FlightModelConfig, InitialConditions};
use nalgebra::{Rotation3, Vector3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::common::{assert_basis_orthonormal, assert_model_valid, create_test_model, fly_for, DT};

#[test]
fn test_basis_stays_orthonormal_under_random_input() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut model = create_test_model();

    for _ in 0..10_000 {
        model.roll(rng.gen_range(-1..=1));
        model.elevate(rng.gen_range(-1..=1));
        model.throttle(rng.gen_range(-1..=1));
        model.update(DT);

        assert_model_valid(&model);
        let basis = model.state().basis;
        assert_relative_eq!(basis.forward.norm(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(basis.up.norm(), 1.0, epsilon = 1e-5);
        assert!(basis.forward.dot(&basis.up).abs() < 1e-5);
    }
}

#[test]
fn test_sustained_throttle_saturates() {
    let mut model = create_test_model();
    fly_for(&mut model, 600, |model, _| model.throttle(1));
    assert_eq!(model.speed(), 3.0);

    let mut model_up = create_test_model();
    let mut previous = model_up.speed();
    for _ in 0..600 {
        model_up.throttle(1);
        model_up.update(DT);
        assert!(model_up.speed() >= previous);
        assert!(model_up.speed() <= 3.0);
        previous = model_up.speed();
    }

    for _ in 0..600 {
        model_up.throttle(-1);
        model_up.update(DT);
        assert!(model_up.speed() <= previous);
        assert!(model_up.speed() >= 0.0);
        previous = model_up.speed();
    }
    assert_eq!(model_up.speed(), 0.0);
}

#[test]
fn test_single_throttle_then_coast() {
    let mut model = create_test_model();
    let start = model.position();

    model.throttle(1);
    fly_for(&mut model, 60, |_, _| {});

    assert!(model.speed() > 1.0);
    assert!(model.speed() < 3.0);
    assert_relative_eq!(model.speed(), 1.0 + 0.5 * DT, epsilon = 1e-12);

    // No input: the attitude stays level and the aircraft flies along +X.
    assert_relative_eq!(model.forward_direction(), Vector3::x(), epsilon = 1e-9);
    let displacement = model.position() - start;
    assert!(displacement.x > 0.5, "displacement {:?}", displacement);
    assert!(displacement.x > 2.0 * displacement.y.abs());
    assert!(displacement.x > 2.0 * displacement.z.abs());
    assert_model_valid(&model);
}

#[test]
fn test_roll_then_auto_level() {
    let mut model = create_test_model();

    let mut bank = model.bank_angle();
    for _ in 0..30 {
        model.roll(1);
        model.update(DT);
        assert!(model.bank_angle() > bank, "bank did not increase");
        // Rolling right lowers the right (-Y) wing.
        assert!(model.up_direction().y < 0.0);
        bank = model.bank_angle();
    }
    assert_relative_eq!(bank, std::f64::consts::PI / 3.0 * 0.5, epsilon = 1e-6);

    let released = bank;
    let mut after_one_second = 0.0;
    for tick in 0..300 {
        model.update(DT);
        assert!(model.bank_angle() <= released);
        if tick == 59 {
            after_one_second = model.bank_angle();
        }
    }
    assert!(after_one_second < released);
    assert!(model.bank_angle() < after_one_second);
    assert!(model.bank_angle() < 0.01, "bank {} not levelled", model.bank_angle());
    assert_model_valid(&model);
}

#[test]
fn test_bank_turns_heading() {
    let mut model = create_test_model();
    fly_for(&mut model, 30, |model, _| model.roll(1));
    fly_for(&mut model, 30, |_, _| {});
    assert!(model.forward_direction().y < 0.0);
}

#[test]
fn test_start_at_rest_stays_finite() {
    let mut model = FlightDynamicsModel::new(
        FlightModelConfig::default(),
        InitialConditions::default()
            .with_velocity(Vector3::zeros())
            .with_speed(0.0),
    );
    fly_for(&mut model, 600, |_, _| {});
    assert_model_valid(&model);
    assert!(model.position().z < 1.2);
}

#[test]
fn test_vertical_dive_stays_finite() {
    let initial = InitialConditions::default()
        .with_speed(3.0)
        .with_attitude(Rotation3::from_axis_angle(
            &Vector3::y_axis(),
            std::f64::consts::FRAC_PI_2,
        ));
    let mut model = FlightDynamicsModel::new(FlightModelConfig::default(), initial);
    assert_relative_eq!(model.forward_direction(), -Vector3::z(), epsilon = 1e-12);

    fly_for(&mut model, 1_000, |model, tick| {
        if tick % 3 == 0 {
            model.roll(1);
        }
    });
    assert_model_valid(&model);
    assert_basis_orthonormal(&model.state().basis, 1e-9);
}
