//! Spherical coordinates `(r, theta, phi)` in the physics convention.
//!
//! Construction performs no validation. [`Spherical3::to_cartesian`] accepts
//! any real triple: a negative `r` reflects the point through the origin and
//! a polar angle outside [0, π] is evaluated through the trigonometric
//! identities. The reverse conversion always produces canonical values, so
//! use [`Spherical3::canonical`] when a normalized form is needed.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use super::cartesian::Cartesian3;

/// A point given by radial distance, polar angle and azimuth (radians)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spherical3 {
    /// Radial distance from the origin
    pub r: f64,
    /// Polar angle (inclination) measured from +z
    pub theta: f64,
    /// Azimuthal angle measured from +x toward +y
    pub phi: f64,
}

impl Spherical3 {
    pub fn new(r: f64, theta: f64, phi: f64) -> Self {
        Spherical3 { r, theta, phi }
    }

    /// Converts to Cartesian coordinates
    ///
    /// - `x = r * sin(theta) * cos(phi)`
    /// - `y = r * sin(theta) * sin(phi)`
    /// - `z = r * cos(theta)`
    ///
    /// No range checks are applied to any component.
    ///
    /// ```rust
    /// use sphconv::Spherical3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let c = Spherical3::new(1.0, FRAC_PI_2, 0.0).to_cartesian();
    /// assert!((c.x - 1.0).abs() < 1e-15);
    /// assert!(c.y.abs() < 1e-15);
    /// assert!(c.z.abs() < 1e-15);
    /// ```
    pub fn to_cartesian(&self) -> Cartesian3 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        Cartesian3 {
            x: self.r * sin_theta * cos_phi,
            y: self.r * sin_theta * sin_phi,
            z: self.r * cos_theta,
        }
    }

    /// Whether `r >= 0`, `theta` lies in [0, π] and `phi` in (−π, π]
    pub fn is_canonical(&self) -> bool {
        self.r >= 0.0
            && (0.0..=PI).contains(&self.theta)
            && self.phi > -PI
            && self.phi <= PI
    }

    /// Returns the equivalent point with canonical component ranges
    ///
    /// Points that are already canonical come back unchanged. Anything else
    /// goes through Cartesian space, which folds negative radii and
    /// out-of-range angles back into place at the cost of rounding.
    ///
    /// ```rust
    /// use sphconv::Spherical3;
    /// use std::f64::consts::{FRAC_PI_2, PI};
    ///
    /// // A negative radius points the other way
    /// let s = Spherical3::new(-2.0, FRAC_PI_2, 0.0).canonical();
    /// assert!((s.r - 2.0).abs() < 1e-12);
    /// assert!((s.theta - FRAC_PI_2).abs() < 1e-12);
    /// assert!((s.phi - PI).abs() < 1e-12);
    /// ```
    pub fn canonical(&self) -> Spherical3 {
        if self.is_canonical() {
            *self
        } else {
            self.to_cartesian().to_spherical()
        }
    }
}

impl From<(f64, f64, f64)> for Spherical3 {
    fn from((r, theta, phi): (f64, f64, f64)) -> Self {
        Spherical3::new(r, theta, phi)
    }
}

impl From<Spherical3> for (f64, f64, f64) {
    fn from(s: Spherical3) -> Self {
        (s.r, s.theta, s.phi)
    }
}

impl From<Spherical3> for Cartesian3 {
    fn from(s: Spherical3) -> Self {
        s.to_cartesian()
    }
}

impl From<Cartesian3> for Spherical3 {
    fn from(c: Cartesian3) -> Self {
        c.to_spherical()
    }
}

/// Formats as `{ r theta phi }` using shortest round-trip float text
impl fmt::Display for Spherical3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {:?} {:?} {:?} }}", self.r, self.theta, self.phi)
    }
}
