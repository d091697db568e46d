//! Tests for CLI argument parsing.

use ceprace::Cli;
use clap::Parser;
use lookup::ProviderKind;
use std::path::PathBuf;

#[test]
fn parse_long_cep() {
    let cli = Cli::try_parse_from(["ceprace", "--cep", "01310-100"]).unwrap();
    assert_eq!(cli.cep.as_deref(), Some("01310-100"));
    assert!(cli.config.is_none());
    assert!(cli.timeout_ms.is_none());
    assert!(cli.only.is_empty());
}

#[test]
fn parse_single_dash_cep_is_rejected() {
    for args in [
        &["ceprace", "-cep"][..],
        &["ceprace", "-cep=01310-100"][..],
        &["ceprace", "-cep", "01310-100"][..],
    ] {
        assert!(Cli::try_parse_from(args).is_err(), "{args:?} should not parse");
    }
}

#[test]
fn parse_without_cep() {
    let cli = Cli::try_parse_from(["ceprace"]).unwrap();
    assert!(cli.cep.is_none());
}

#[test]
fn parse_overrides() {
    let cli = Cli::try_parse_from([
        "ceprace",
        "--cep",
        "01310-100",
        "--config",
        "/tmp/ceprace.toml",
        "--timeout-ms",
        "2500",
        "--provider-timeout-ms",
        "800",
        "--only",
        "via-cep",
        "--only",
        "brasil_api",
    ])
    .unwrap();

    assert_eq!(cli.config, Some(PathBuf::from("/tmp/ceprace.toml")));
    assert_eq!(cli.timeout_ms, Some(2500));
    assert_eq!(cli.provider_timeout_ms, Some(800));
    assert_eq!(cli.only, [ProviderKind::ViaCep, ProviderKind::BrasilApi]);
}

#[test]
fn parse_unknown_provider_fails() {
    assert!(Cli::try_parse_from(["ceprace", "--cep", "1", "--only", "correios"]).is_err());
}

#[test]
fn parse_invalid_timeout_fails() {
    assert!(Cli::try_parse_from(["ceprace", "--cep", "1", "--timeout-ms", "soon"]).is_err());
}
