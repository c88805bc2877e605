// Command-line parsing tests

use pretty_assertions::assert_eq;
use sortty::config::{Config, ConfigError};
use sortty::engine::Speed;
use sortty::sorting::Algorithm;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Result<Config, ConfigError> {
    Config::from_args(args.iter().map(|s| s.to_string()))
}

#[test]
fn test_defaults() {
    let config = parse(&[]).expect("empty args should parse");
    assert_eq!(config, Config::default());
    assert_eq!(config.algorithm, Algorithm::Insertion);
    assert_eq!(config.speed, Speed::Medium);
    assert_eq!((config.bar_width, config.bar_height), (20, 50));
}

#[test]
fn test_full_command_line() {
    let config = parse(&[
        "shell",
        "--speed",
        "fast",
        "--seed",
        "1234",
        "--bar-width",
        "12",
        "--bar-height",
        "90",
        "--log",
        "sortty.log",
    ])
    .expect("valid args should parse");

    assert_eq!(config.algorithm, Algorithm::Shell);
    assert_eq!(config.speed, Speed::Fast);
    assert_eq!(config.seed, Some(1234));
    assert_eq!((config.bar_width, config.bar_height), (12, 90));
    assert_eq!(config.log_file, Some(PathBuf::from("sortty.log")));
}

#[test]
fn test_non_positive_dimensions_fall_back() {
    let config = parse(&["--bar-width", "0", "--bar-height", "-7"]).expect("should coerce");
    assert_eq!((config.bar_width, config.bar_height), (20, 50));
}

#[test]
fn test_errors() {
    assert!(matches!(parse(&["radix"]), Err(ConfigError::Algorithm(_))));
    assert!(matches!(
        parse(&["--speed", "ludicrous"]),
        Err(ConfigError::Speed(_))
    ));
    assert!(matches!(
        parse(&["--seed"]),
        Err(ConfigError::MissingValue { .. })
    ));
    assert!(matches!(
        parse(&["--bar-width", "wide"]),
        Err(ConfigError::InvalidNumber { .. })
    ));
    assert!(matches!(
        parse(&["--verbose"]),
        Err(ConfigError::UnknownOption(_))
    ));
    assert!(matches!(
        parse(&["quick", "merge"]),
        Err(ConfigError::UnexpectedArgument(_))
    ));
    assert!(matches!(parse(&["-h"]), Err(ConfigError::HelpRequested)));
}

#[test]
fn test_error_messages_name_the_input() {
    let err = parse(&["--speed", "warp"]).unwrap_err();
    assert!(err.to_string().contains("warp"));

    let err = parse(&["bogo"]).unwrap_err();
    assert!(err.to_string().contains("bogo"));
}

#[test]
fn test_oversized_dimensions_fall_back() {
    let config = parse(&["--bar-width", "4294967295", "--bar-height", "99999999999"])
        .expect("should coerce");
    assert_eq!((config.bar_width, config.bar_height), (20, 50));

    let config = parse(&["--bar-width", "801", "--bar-height", "401"]).expect("should coerce");
    assert_eq!((config.bar_width, config.bar_height), (20, 50));

    let config = parse(&["--bar-width", "800", "--bar-height", "400"]).expect("should parse");
    assert_eq!((config.bar_width, config.bar_height), (800, 400));
}
