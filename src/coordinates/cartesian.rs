//! # Cartesian Coordinate Module
//!
//! A 3D Cartesian point in a right-handed frame. This is the representation
//! without singularities: every real triple is a valid point, and the
//! conversion to spherical form is where the special cases live.
//!
//! ## Conversion Convention
//!
//! [`Cartesian3::to_spherical`] produces the physics convention:
//! - **r**: `sqrt(x² + y² + z²)`, never negative
//! - **theta**: polar angle from +z, in [0, π]
//! - **phi**: azimuth from +x toward +y, in (−π, π]
//!
//! ## Examples
//!
//! ```rust
//! use sphconv::coordinates::cartesian::Cartesian3;
//!
//! let up = Cartesian3::new(0.0, 0.0, 2.0);
//! let s = up.to_spherical();
//! assert_eq!(s.r, 2.0);
//! assert_eq!(s.theta, 0.0);
//! assert_eq!(s.phi, 0.0);
//! ```

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use super::spherical::Spherical3;

/// Three-dimensional Cartesian coordinate
///
/// Components are stored exactly as given; no normalization happens on
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian coordinate
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sphconv::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(1.0, 2.0, 3.0);
    /// assert_eq!(coord.x, 1.0);
    /// assert_eq!(coord.y, 2.0);
    /// assert_eq!(coord.z, 3.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Calculates the magnitude (length) of the coordinate vector
    ///
    /// `magnitude = sqrt(x² + y² + z²)`, evaluated with `hypot` so that
    /// components near the ends of the `f64` range neither underflow to zero
    /// nor overflow to infinity when squared.
    ///
    /// ```rust
    /// use sphconv::coordinates::cartesian::Cartesian3;
    ///
    /// assert_eq!(Cartesian3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Converts to spherical coordinates
    ///
    /// # Special Cases
    ///
    /// - The origin maps to `r = 0, theta = 0, phi = 0`; the polar angle is
    ///   undefined there and 0 is the chosen convention.
    /// - Points on the z axis (`x = y = 0`) get `phi = 0`.
    /// - `z / r` is clamped to [−1, 1] before `acos`, so rounding can never
    ///   push it out of the domain.
    /// - `atan2` yields −π for a negative x with `y = -0.0`; that is folded
    ///   to +π to keep phi in (−π, π].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sphconv::coordinates::cartesian::Cartesian3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let s = Cartesian3::new(0.0, 1.0, 0.0).to_spherical();
    /// assert!((s.r - 1.0).abs() < 1e-15);
    /// assert!((s.theta - FRAC_PI_2).abs() < 1e-15);
    /// assert!((s.phi - FRAC_PI_2).abs() < 1e-15);
    /// ```
    pub fn to_spherical(&self) -> Spherical3 {
        let r = self.magnitude();

        if r == 0.0 {
            return Spherical3::new(0.0, 0.0, 0.0);
        }

        let theta = polar_angle(self.z, r);
        let phi = if self.x == 0.0 && self.y == 0.0 {
            0.0
        } else {
            let phi = self.y.atan2(self.x);
            if phi == -PI {
                PI
            } else {
                phi
            }
        };

        Spherical3::new(r, theta, phi)
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

/// Polar angle from `z` and a nonzero radius, with the cosine clamped to
/// [−1, 1] since `z / r` can land just outside it when `r` is rounded
fn polar_angle(z: f64, r: f64) -> f64 {
    (z / r).clamp(-1.0, 1.0).acos()
}

impl From<(f64, f64, f64)> for Cartesian3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Cartesian3::new(x, y, z)
    }
}

impl From<Cartesian3> for (f64, f64, f64) {
    fn from(c: Cartesian3) -> Self {
        (c.x, c.y, c.z)
    }
}

impl From<Vector3<f64>> for Cartesian3 {
    fn from(vec: Vector3<f64>) -> Self {
        Cartesian3::from_vector3(vec)
    }
}

/// Formats as `{ x y z }` using shortest round-trip float text
impl fmt::Display for Cartesian3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {:?} {:?} {:?} }}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_cartesian_creation() {
        let coord = Cartesian3::new(1.0, 2.0, 3.0);
        assert_eq!(coord.x, 1.0);
        assert_eq!(coord.y, 2.0);
        assert_eq!(coord.z, 3.0);
    }

    #[test]
    fn test_magnitude_calculation() {
        assert_eq!(Cartesian3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(Cartesian3::new(0.0, 0.0, -2.0).magnitude(), 2.0);
        assert_eq!(Cartesian3::new(0.0, 0.0, 0.0).magnitude(), 0.0);
    }

    #[rstest]
    #[case::plus_z((0.0, 0.0, 1.0), (1.0, 0.0, 0.0))]
    #[case::minus_z((0.0, 0.0, -1.0), (1.0, PI, 0.0))]
    #[case::plus_x((1.0, 0.0, 0.0), (1.0, FRAC_PI_2, 0.0))]
    #[case::minus_x((-1.0, 0.0, 0.0), (1.0, FRAC_PI_2, PI))]
    #[case::plus_y((0.0, 1.0, 0.0), (1.0, FRAC_PI_2, FRAC_PI_2))]
    #[case::minus_y((0.0, -1.0, 0.0), (1.0, FRAC_PI_2, -FRAC_PI_2))]
    #[case::third_quadrant((-1.0, -1.0, 0.0), (2f64.sqrt(), FRAC_PI_2, -3.0 * FRAC_PI_4))]
    #[case::scaled_z((0.0, 0.0, 5.0), (5.0, 0.0, 0.0))]
    fn test_axis_points(#[case] input: (f64, f64, f64), #[case] expected: (f64, f64, f64)) {
        let s = Cartesian3::from(input).to_spherical();
        assert_abs_diff_eq!(s.r, expected.0, epsilon = 1e-15);
        assert_abs_diff_eq!(s.theta, expected.1, epsilon = 1e-15);
        assert_abs_diff_eq!(s.phi, expected.2, epsilon = 1e-15);
    }

    #[test]
    fn test_origin_is_defined() {
        let s = Cartesian3::new(0.0, 0.0, 0.0).to_spherical();
        assert_eq!(s, Spherical3::new(0.0, 0.0, 0.0));

        let s = Cartesian3::new(-0.0, -0.0, -0.0).to_spherical();
        assert_eq!(s.r, 0.0);
        assert_eq!(s.theta, 0.0);
        assert_eq!(s.phi, 0.0);
    }

    #[test]
    fn test_negative_zero_y_stays_in_azimuth_range() {
        let s = Cartesian3::new(-1.0, -0.0, 0.0).to_spherical();
        assert_eq!(s.phi, PI);

        let s = Cartesian3::new(0.0, -0.0, -3.0).to_spherical();
        assert_eq!(s.phi, 0.0);
        assert_eq!(s.theta, PI);
    }

    #[test]
    fn test_polar_cosine_outside_unit_range_is_clamped() {
        // A radius rounded one ulp short of |z|
        let short_r = 1.0 - f64::EPSILON / 2.0;
        assert!(1.0 / short_r > 1.0);
        assert_eq!(polar_angle(1.0, short_r), 0.0);
        assert_eq!(polar_angle(-1.0, short_r), PI);
        assert_abs_diff_eq!(polar_angle(0.0, short_r), FRAC_PI_2, epsilon = 1e-15);
    }

    #[test]
    fn test_near_axis_points_keep_polar_angle_defined() {
        // Off-axis components far too small to move r away from |z|
        let s = Cartesian3::new(1e-300, 0.0, 1.0).to_spherical();
        assert!(!s.theta.is_nan());
        assert!(s.theta >= 0.0);

        let s = Cartesian3::new(0.0, 1e-300, -1.0).to_spherical();
        assert!(!s.theta.is_nan());
        assert!(s.theta <= PI);
    }

    #[test]
    fn test_extreme_magnitudes() {
        let tiny = Cartesian3::new(0.0, 0.0, 1e-200).to_spherical();
        assert_eq!(tiny.r, 1e-200);
        assert_eq!(tiny.theta, 0.0);

        let huge = Cartesian3::new(1e200, 0.0, 0.0).to_spherical();
        assert_eq!(huge.r, 1e200);
        assert_abs_diff_eq!(huge.theta, FRAC_PI_2, epsilon = 1e-15);
    }

    #[test]
    fn test_vector3_conversions() {
        let coord = Cartesian3::new(1.0, 2.0, 3.0);
        let vec = coord.to_vector3();

        assert_eq!(vec.x, 1.0);
        assert_eq!(vec.y, 2.0);
        assert_eq!(vec.z, 3.0);
        assert_abs_diff_eq!(vec.norm(), coord.magnitude(), epsilon = 1e-15);

        let coord_back = Cartesian3::from(vec);
        assert_eq!(coord, coord_back);
    }

    #[test]
    fn test_display_template() {
        let coord = Cartesian3::new(1.0, -0.5, 6.123233995736766e-17);
        assert_eq!(coord.to_string(), "{ 1.0 -0.5 6.123233995736766e-17 }");
    }
}
