//! Coordinate representations and the conversions between them
//!
//! The tuple-based free functions mirror the methods on [`Cartesian3`] and
//! [`Spherical3`] for callers that work with bare `(f64, f64, f64)` triples.

pub mod cartesian;
pub mod spherical;

pub use cartesian::Cartesian3;
pub use spherical::Spherical3;

/// Converts `(x, y, z)` to `(r, theta, phi)`
///
/// `r >= 0`, `theta` is in [0, π] and `phi` in (−π, π]. The origin yields
/// `(0, 0, 0)`. See [`Cartesian3::to_spherical`] for the edge cases.
pub fn cartesian_to_spherical(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    Cartesian3::new(x, y, z).to_spherical().into()
}

/// Converts `(r, theta, phi)` to `(x, y, z)`
///
/// Accepts any real inputs without range checks; see
/// [`Spherical3::to_cartesian`].
pub fn spherical_to_cartesian(r: f64, theta: f64, phi: f64) -> (f64, f64, f64) {
    Spherical3::new(r, theta, phi).to_cartesian().into()
}
