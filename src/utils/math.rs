use bevy::prelude::*;
use nalgebra::{Matrix3, Rotation3, Vector3};
use std::f64::consts::PI;

/// Vectors shorter than this are treated as degenerate when normalizing.
pub const NORMALIZE_EPSILON: f64 = 1e-12;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Three-valued sign: -1, 0 or 1. Unlike `f64::signum`, zero maps to zero.
#[inline]
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Normalize `v`, returning `fallback` when `v` is too short (or not finite)
/// to have a direction.
pub fn safe_normalize(v: &Vector3<f64>, fallback: Vector3<f64>) -> Vector3<f64> {
    match v.try_normalize(NORMALIZE_EPSILON) {
        Some(n) if n.iter().all(|c| c.is_finite()) => n,
        _ => {
            debug!("degenerate vector {:?} normalized to fallback {:?}", v, fallback);
            fallback
        }
    }
}

/// Gram-Schmidt re-orthonormalization of an accumulated rotation.
///
/// The first column (body forward) keeps its direction, the second column
/// (body left) is made orthogonal to it and the third (body up) is rebuilt
/// as their cross product, so the result is a proper rotation regardless of
/// the drift accumulated by repeated multiplication.
pub fn orthonormalize(rotation: &Rotation3<f64>) -> Rotation3<f64> {
    let m = rotation.matrix();
    let forward = safe_normalize(&m.column(0).into_owned(), Vector3::x());

    let left_raw = m.column(1).into_owned();
    let left_ortho = left_raw - forward * forward.dot(&left_raw);
    let left = match left_ortho.try_normalize(NORMALIZE_EPSILON) {
        Some(left) => left,
        None => {
            warn!("body left axis collapsed onto forward, rebuilding from up axis");
            let up_raw = m.column(2).into_owned();
            safe_normalize(&up_raw.cross(&forward), any_orthogonal(&forward))
        }
    };
    let up = forward.cross(&left);

    Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[forward, left, up]))
}

/// Some unit vector orthogonal to the unit vector `v`.
pub fn any_orthogonal(v: &Vector3<f64>) -> Vector3<f64> {
    let helper = if v.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    safe_normalize(&v.cross(&helper), Vector3::z())
}

/// True when the three vectors form an orthonormal set within `tolerance`.
pub fn is_orthonormal(
    a: &Vector3<f64>,
    b: &Vector3<f64>,
    c: &Vector3<f64>,
    tolerance: f64,
) -> bool {
    let unit = |v: &Vector3<f64>| (v.norm() - 1.0).abs() <= tolerance;
    unit(a)
        && unit(b)
        && unit(c)
        && a.dot(b).abs() <= tolerance
        && a.dot(c).abs() <= tolerance
        && b.dot(c).abs() <= tolerance
}

/// True when every component is finite.
#[inline]
pub fn is_finite(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}
