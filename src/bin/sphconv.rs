//! Spherical/Cartesian conversion tool
//!
//! Converts a single spherical point `(r, theta, phi)` to Cartesian
//! coordinates and prints both triples. Angles are in radians.
//!
//! Usage:
//!   cargo run --bin sphconv -- 1 1.5707963267948966 0
//!   cargo run --bin sphconv -- --inverse 1 0 0

use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{debug, info, LevelFilter};
use sphconv::cli::{parse_triple, separate_hyphen_values, Conversion, Direction};

/// Spherical/Cartesian conversion tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Converts spherical coordinates (r theta phi, radians) to cartesian (x y z)",
    long_about = None
)]
struct Args {
    /// Read the values as x y z and convert to spherical instead
    #[arg(short, long, action = ArgAction::SetTrue)]
    inverse: bool,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Three numbers: r theta phi (or x y z with --inverse). Flags go
    /// before the values.
    #[arg(num_args = 0.., allow_negative_numbers = true, value_name = "VALUE")]
    values: Vec<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn main() -> ExitCode {
    let args = Args::parse_from(separate_hyphen_values(std::env::args_os()));
    init_logging(args.verbose);

    let direction = if args.inverse {
        Direction::CartesianToSpherical
    } else {
        Direction::SphericalToCartesian
    };
    info!("converting {:?} from {:?}", direction, args.values);

    let values = match parse_triple(&args.values, direction) {
        Ok(values) => values,
        Err(e) => {
            debug!("rejected input {:?}", args.values);
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", Conversion::run(direction, values));
    ExitCode::SUCCESS
}
