//! Command line front end helpers
//!
//! Turns positional argument text into a coordinate triple and renders the
//! two-line result printed by the `sphconv` binary:
//!
//! ```text
//! Spherical to cartesian:
//! { 1.0 1.5707963267948966 0.0 } -> { 1.0 0.0 6.123233995736766e-17 }
//! ```

use std::ffi::OsString;
use std::fmt;

use log::{debug, warn};

use crate::coordinates::{Cartesian3, Spherical3};
use crate::{Result, SphconvError};

/// Which way a conversion runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `(r, theta, phi)` in, `(x, y, z)` out
    SphericalToCartesian,
    /// `(x, y, z)` in, `(r, theta, phi)` out
    CartesianToSpherical,
}

impl Direction {
    /// Names of the three input values, in positional order
    pub fn input_names(&self) -> [&'static str; 3] {
        match self {
            Direction::SphericalToCartesian => ["r", "theta", "phi"],
            Direction::CartesianToSpherical => ["x", "y", "z"],
        }
    }

    /// Header line printed above the result
    pub fn title(&self) -> &'static str {
        match self {
            Direction::SphericalToCartesian => "Spherical to cartesian:",
            Direction::CartesianToSpherical => "Cartesian to spherical:",
        }
    }
}

/// Outcome of a single conversion, holding both triples
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    SphericalToCartesian {
        input: Spherical3,
        output: Cartesian3,
    },
    CartesianToSpherical {
        input: Cartesian3,
        output: Spherical3,
    },
}

impl Conversion {
    /// Runs the conversion for `direction` on an already parsed triple
    pub fn run(direction: Direction, values: [f64; 3]) -> Self {
        let [a, b, c] = values;
        let conversion = match direction {
            Direction::SphericalToCartesian => {
                let input = Spherical3::new(a, b, c);
                Conversion::SphericalToCartesian {
                    input,
                    output: input.to_cartesian(),
                }
            }
            Direction::CartesianToSpherical => {
                let input = Cartesian3::new(a, b, c);
                Conversion::CartesianToSpherical {
                    input,
                    output: input.to_spherical(),
                }
            }
        };
        debug!("{:?}", conversion);
        conversion
    }

    pub fn direction(&self) -> Direction {
        match self {
            Conversion::SphericalToCartesian { .. } => Direction::SphericalToCartesian,
            Conversion::CartesianToSpherical { .. } => Direction::CartesianToSpherical,
        }
    }
}

/// Renders the header line, a newline, then `{ in } -> { out }`
impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.direction().title())?;
        match self {
            Conversion::SphericalToCartesian { input, output } => {
                write!(f, "{} -> {}", input, output)
            }
            Conversion::CartesianToSpherical { input, output } => {
                write!(f, "{} -> {}", input, output)
            }
        }
    }
}

/// Inserts `--` ahead of the first hyphen-led argument that parses as a
/// number, so values like `-1e-3`, `-.5` or `-inf` reach the positional
/// list instead of being read as clusters of short flags
///
/// The first item is the program name and is never inspected. Input that
/// already contains `--` is returned unchanged. Flags still work ahead of
/// the first negative value.
pub fn separate_hyphen_values<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.iter().skip(1).any(|arg| arg == "--") {
        return args;
    }

    let split = args.iter().skip(1).position(|arg| {
        arg.to_str()
            .map_or(false, |text| text.starts_with('-') && text.parse::<f64>().is_ok())
    });

    match split {
        Some(index) => {
            let mut separated = args;
            separated.insert(index + 1, OsString::from("--"));
            separated
        }
        None => args,
    }
}

/// Parses exactly three positional values as `f64`
///
/// Non-finite values (`nan`, `inf`) parse successfully but are reported
/// through the log.
pub fn parse_triple<S: AsRef<str>>(args: &[S], direction: Direction) -> Result<[f64; 3]> {
    let names = direction.input_names();
    let expected_names = names.join(" ");

    if args.len() != names.len() {
        return Err(SphconvError::ArgumentCount {
            expected_names,
            found: args.len(),
        });
    }

    let mut values = [0.0; 3];
    for ((slot, name), arg) in values.iter_mut().zip(names).zip(args) {
        let text = arg.as_ref().trim();
        let value: f64 = text.parse().map_err(|_| SphconvError::InvalidNumber {
            expected_names: expected_names.clone(),
            name,
            value: arg.as_ref().to_string(),
        })?;
        if !value.is_finite() {
            warn!(
                "{} is not finite ({}); the result will not be either",
                name, value
            );
        }
        *slot = value;
    }

    Ok(values)
}
