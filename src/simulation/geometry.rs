//! Planar vector helpers on top of nalgebra's `Vector2<f64>`.
//!
//! Addition, subtraction and scaling are nalgebra's operators. Everything the
//! engine needs beyond that (checked normalisation, rotation, the
//! perpendicular normal of a surface and the signed angle between two
//! directions) lives on the [`Planar`] trait, and the reflection logic in
//! `collision` is written only in terms of these.

use std::f64::consts::PI;

use nalgebra::Rotation2;

use super::states::NVec2;
use crate::error::{Result, SimError};

pub trait Planar: Sized {
    /// Euclidean norm
    fn length(&self) -> f64;

    /// Unit vector in the same direction, fails on a zero vector
    fn normalized(&self) -> Result<Self>;

    /// Copy rotated counter-clockwise by `angle` radians about the origin
    fn rotated(&self, angle: f64) -> Self;

    /// In-place counter-clockwise rotation by `angle` radians
    fn rotate(&mut self, angle: f64);

    /// Unit vector rotated +90° from `self`, fails on a zero vector
    fn perpendicular_normal(&self) -> Result<Self>;

    /// Signed angle in `(-π, π]` from `self` to `other`, positive when
    /// `other` lies counter-clockwise of `self`
    fn angle_between(&self, other: &Self) -> f64;
}

impl Planar for NVec2 {
    fn length(&self) -> f64 {
        self.norm()
    }

    fn normalized(&self) -> Result<Self> {
        let len = self.norm();
        if len == 0.0 || !len.is_finite() {
            return Err(SimError::DegenerateGeometry(format!(
                "cannot normalise vector ({}, {}) of length {len}",
                self.x, self.y
            )));
        }
        Ok(self / len)
    }

    fn rotated(&self, angle: f64) -> Self {
        Rotation2::new(angle) * *self
    }

    fn rotate(&mut self, angle: f64) {
        *self = self.rotated(angle);
    }

    fn perpendicular_normal(&self) -> Result<Self> {
        NVec2::new(-self.y, self.x).normalized()
    }

    fn angle_between(&self, other: &Self) -> f64 {
        let cross = self.perp(other);
        let dot = self.dot(other);
        let angle = cross.atan2(dot);
        // atan2 reports -π for a negative-zero cross product
        if angle <= -PI {
            PI
        } else {
            angle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn normalizing_zero_vector_is_degenerate() {
        let err = NVec2::zeros().normalized().unwrap_err();
        assert!(matches!(err, SimError::DegenerateGeometry(_)));
        assert!(NVec2::zeros().perpendicular_normal().is_err());
    }

    #[test]
    fn normalized_has_unit_length() {
        let u = NVec2::new(3.0, -4.0).normalized().unwrap();
        assert_relative_eq!(u.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(u.x, 0.6, epsilon = 1e-12);
        assert_relative_eq!(u.y, -0.8, epsilon = 1e-12);
    }

    #[test]
    fn rotation_round_trips_for_many_angles() {
        let v = NVec2::new(7.5, -2.25);
        for k in -20..=20 {
            let angle = k as f64 * 0.37;
            let back = v.rotated(angle).rotated(-angle);
            assert_relative_eq!(back.x, v.x, epsilon = 1e-9);
            assert_relative_eq!(back.y, v.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        let v = NVec2::new(1.0, 0.0).rotated(FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn perpendicular_normal_points_left() {
        let n = NVec2::new(10.0, 0.0).perpendicular_normal().unwrap();
        assert_relative_eq!(n.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(n.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn angle_between_is_signed() {
        let x = NVec2::new(1.0, 0.0);
        assert_relative_eq!(x.angle_between(&NVec2::new(0.0, 2.0)), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(x.angle_between(&NVec2::new(0.0, -2.0)), -FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(x.angle_between(&NVec2::new(-1.0, 0.0)), PI, epsilon = 1e-12);
        assert_relative_eq!(x.angle_between(&NVec2::new(-1.0, -0.0)), PI, epsilon = 1e-12);
        assert_eq!(x.angle_between(&NVec2::zeros()), 0.0);
    }
}
