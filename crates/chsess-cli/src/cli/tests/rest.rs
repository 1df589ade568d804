//! Tests for check, decode, config-path.

use super::{parse, parse_err};
use crate::cli::CliCommand;

#[test]
fn cli_parse_check() {
    match parse(&["chsess", "check"]) {
        CliCommand::Check { file } => assert!(file.is_none()),
        _ => panic!("expected Check"),
    }
    match parse(&["chsess", "check", "cart.chlsj"]) {
        CliCommand::Check { file } => assert_eq!(file.as_deref(), Some("cart.chlsj")),
        _ => panic!("expected Check with file"),
    }
}

#[test]
fn cli_parse_decode() {
    match parse(&["chsess", "decode", "/tmp/capture.chlsj", "--json"]) {
        CliCommand::Decode { path, json } => {
            assert_eq!(path, "/tmp/capture.chlsj");
            assert!(json);
        }
        _ => panic!("expected Decode"),
    }
}

#[test]
fn cli_parse_decode_requires_path() {
    let err = parse_err(&["chsess", "decode"]);
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn cli_parse_config_path() {
    match parse(&["chsess", "config-path"]) {
        CliCommand::ConfigPath => {}
        _ => panic!("expected ConfigPath"),
    }
}
