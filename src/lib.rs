//! sphconv: conversions between 3D Cartesian and spherical coordinates
//!
//! Spherical points use the physics convention: `r` is the radial distance,
//! `theta` the polar angle measured from the +z axis and `phi` the azimuth
//! measured from +x toward +y. All angles are in radians.
//!
//! ```rust
//! use sphconv::{cartesian_to_spherical, spherical_to_cartesian};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let (r, theta, phi) = cartesian_to_spherical(1.0, 0.0, 0.0);
//! assert_eq!(r, 1.0);
//! assert!((theta - FRAC_PI_2).abs() < 1e-15);
//! assert_eq!(phi, 0.0);
//!
//! let (x, y, z) = spherical_to_cartesian(r, theta, phi);
//! assert!((x - 1.0).abs() < 1e-15);
//! assert!(y.abs() < 1e-15);
//! assert!(z.abs() < 1e-15);
//! ```

use thiserror::Error;

pub mod cli;
pub mod coordinates;

// Re-export commonly used types
pub use coordinates::cartesian::Cartesian3;
pub use coordinates::spherical::Spherical3;
pub use coordinates::{cartesian_to_spherical, spherical_to_cartesian};

/// Main error type for the sphconv library
///
/// The conversions themselves never fail; every variant describes bad input
/// handed to the command line front end.
#[derive(Debug, Error, PartialEq)]
pub enum SphconvError {
    /// Wrong number of positional values
    #[error("expected 3 numeric arguments: {expected_names} (got {found})")]
    ArgumentCount {
        /// Space separated names of the expected values, e.g. `r theta phi`
        expected_names: String,
        /// Number of values actually supplied
        found: usize,
    },

    /// A positional value that does not parse as a real number
    #[error("expected 3 numeric arguments: {expected_names} ({name} = {value:?} is not a number)")]
    InvalidNumber {
        /// Space separated names of the expected values
        expected_names: String,
        /// Name of the offending value
        name: &'static str,
        /// The text that failed to parse
        value: String,
    },
}

/// Result type for sphconv operations
pub type Result<T> = std::result::Result<T, SphconvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_expected_arguments() {
        let count = SphconvError::ArgumentCount {
            expected_names: "r theta phi".to_string(),
            found: 2,
        };
        assert_eq!(
            count.to_string(),
            "expected 3 numeric arguments: r theta phi (got 2)"
        );

        let parse = SphconvError::InvalidNumber {
            expected_names: "x y z".to_string(),
            name: "y",
            value: "abc".to_string(),
        };
        assert_eq!(
            parse.to_string(),
            "expected 3 numeric arguments: x y z (y = \"abc\" is not a number)"
        );
    }
}
