//! Command-line configuration
//!
//! ```text
//! sortty [ALGORITHM] [--speed slow|medium|fast] [--seed N]
//!        [--bar-width N] [--bar-height N] [--log FILE] [--help]
//! ```
//!
//! Bar dimensions are never rejected: a number that is not positive or does
//! not fit on the drawing surface falls back to the default, the same way
//! [`crate::bars::BarArray::resize`] coerces its inputs.

use crate::bars::constants::{DEFAULT_BAR_HEIGHT, DEFAULT_BAR_WIDTH};
use crate::bars::{coerce_height, coerce_width};
use crate::engine::speed::{ParseSpeedError, Speed};
use crate::sorting::{Algorithm, ParseAlgorithmError};
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "\
Usage: sortty [ALGORITHM] [OPTIONS]

Algorithms: insertion (default), selection, bubble, quick, merge, shell

Options:
  --speed <TIER>      slow, medium (default) or fast
  --seed <N>          seed for the random bar heights
  --bar-width <N>     width applied by resize, 1-800 (default 20)
  --bar-height <N>    height applied by resize, 1-400 (default 50)
  --log <FILE>        write tracing output to FILE (filter with RUST_LOG)
  -h, --help          print this message";

/// Errors produced while reading the command line
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Algorithm(#[from] ParseAlgorithmError),

    #[error(transparent)]
    Speed(#[from] ParseSpeedError),

    #[error("missing value for {flag}")]
    MissingValue { flag: String },

    #[error("invalid number '{value}' for {flag}")]
    InvalidNumber { flag: String, value: String },

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    /// Not a failure: the caller should print [`USAGE`] and exit
    #[error("help requested")]
    HelpRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub algorithm: Algorithm,
    pub speed: Speed,
    /// `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Width applied by a resize
    pub bar_width: u32,
    /// Height applied by a resize
    pub bar_height: u32,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: Algorithm::default(),
            speed: Speed::default(),
            seed: None,
            bar_width: DEFAULT_BAR_WIDTH,
            bar_height: DEFAULT_BAR_HEIGHT,
            log_file: None,
        }
    }
}

impl Config {
    /// Parse arguments, not including the program name
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut algorithm_seen = false;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Err(ConfigError::HelpRequested),
                "--speed" => {
                    config.speed = value_for(&arg, args.next())?.parse()?;
                }
                "--seed" => {
                    let value = value_for(&arg, args.next())?;
                    let seed = value.parse().map_err(|_| ConfigError::InvalidNumber {
                        flag: arg.clone(),
                        value,
                    })?;
                    config.seed = Some(seed);
                }
                "--bar-width" => {
                    config.bar_width = dimension(&arg, args.next(), coerce_width)?;
                }
                "--bar-height" => {
                    config.bar_height = dimension(&arg, args.next(), coerce_height)?;
                }
                "--log" => {
                    config.log_file = Some(PathBuf::from(value_for(&arg, args.next())?));
                }
                flag if flag.starts_with('-') => {
                    return Err(ConfigError::UnknownOption(arg));
                }
                _ if !algorithm_seen => {
                    config.algorithm = arg.parse()?;
                    algorithm_seen = true;
                }
                _ => return Err(ConfigError::UnexpectedArgument(arg)),
            }
        }

        Ok(config)
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingValue {
        flag: flag.to_string(),
    })
}

/// Parse a dimension and pass it through `coerce`. Values that do not fit a
/// `u32` are out of range too.
fn dimension(
    flag: &str,
    value: Option<String>,
    coerce: fn(u32) -> u32,
) -> Result<u32, ConfigError> {
    let value = value_for(flag, value)?;
    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            flag: flag.to_string(),
            value: value.clone(),
        })?;

    // zero is out of range for both dimensions
    Ok(coerce(u32::try_from(parsed).unwrap_or(0)))
}
