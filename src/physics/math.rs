//! Scalar and vector types shared by the physics engine
//!
//! The engine treats [`Vector`] as an opaque immutable value. Every helper in
//! this module returns a new value and never mutates its inputs.

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 3D vector type for positions, velocities, and accelerations
pub type Vector = bevy::math::DVec3;

/// Unit vector pointing the same way as `v`, together with the norm of `v`.
///
/// A zero vector is its own (degenerate) unit vector, so two coincident
/// bodies produce a zero direction instead of NaNs.
#[inline]
pub fn unit_and_norm(v: Vector) -> (Vector, Scalar) {
    (v.normalize_or_zero(), v.length())
}

/// Split `v` into the part parallel to `axis` and the part orthogonal to it.
///
/// With a zero `axis` the whole of `v` is the rejection.
pub fn projection_rejection(v: Vector, axis: Vector) -> (Vector, Vector) {
    let unit = axis.normalize_or_zero();
    let projection = unit * v.dot(unit);
    (projection, v - projection)
}
