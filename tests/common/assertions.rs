use fly::components::{AircraftBasis, FlightDynamicsModel};
use nalgebra::Vector3;

/// Assert that a vector has unit length within `tolerance`
#[track_caller]
pub fn assert_unit(v: &Vector3<f64>, tolerance: f64) {
    assert!(
        (v.norm() - 1.0).abs() <= tolerance,
        "Vector {:?} has length {}",
        v,
        v.norm()
    );
}

/// Assert that the body axes are mutually orthogonal unit vectors
#[track_caller]
pub fn assert_basis_orthonormal(basis: &AircraftBasis, tolerance: f64) {
    assert_unit(&basis.forward, tolerance);
    assert_unit(&basis.left, tolerance);
    assert_unit(&basis.up, tolerance);
    assert!(
        basis.forward.dot(&basis.up).abs() <= tolerance,
        "forward·up = {}",
        basis.forward.dot(&basis.up)
    );
    assert!(
        basis.forward.dot(&basis.left).abs() <= tolerance,
        "forward·left = {}",
        basis.forward.dot(&basis.left)
    );
    assert!(
        basis.left.dot(&basis.up).abs() <= tolerance,
        "left·up = {}",
        basis.left.dot(&basis.up)
    );
}

/// Assert that a flight model's state is finite, orthonormal and within its clamps
#[track_caller]
pub fn assert_model_valid(model: &FlightDynamicsModel) {
    let state = model.state();
    assert!(
        state.position.iter().all(|x| x.is_finite()),
        "Position is not finite"
    );
    assert!(
        state.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite"
    );
    assert_basis_orthonormal(&state.basis, 1e-5);
    assert!(
        (0.0..=model.config().max_speed).contains(&model.speed()),
        "Speed {} outside clamp",
        model.speed()
    );
}
