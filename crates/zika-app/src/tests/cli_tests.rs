use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use zika_config::{Config, FetchErrorPolicy};
use zika_core::CardKind;

use crate::cli::Cli;
use crate::logging::LogFormat;
use crate::profile::load_config;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("zika").chain(args.iter().copied()))
}

#[test]
fn test_requires_input_and_output() {
    assert!(parse(&["chars"]).is_err());
    assert!(parse(&["words", "only.txt"]).is_err());
    assert!(parse(&["sentences", "in.txt", "out.txt"]).is_ok());
}

#[test]
fn test_last_path_is_output() {
    let cli = parse(&["words", "a.txt", "b.txt", "out.txt"]).unwrap();
    let job = cli.command.into_job(Config::default()).unwrap();

    assert_eq!(job.kind, CardKind::Words);
    assert_eq!(job.inputs, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    assert_eq!(job.output, PathBuf::from("out.txt"));
}

#[test]
fn test_lookup_flags_override_config() {
    let cli = parse(&[
        "chars",
        "--source",
        "baidu",
        "--concurrency",
        "4",
        "--timeout",
        "7",
        "--on-fetch-error",
        "skip",
        "--log-format",
        "json",
        "in.txt",
        "out.txt",
    ])
    .unwrap();
    assert_eq!(cli.log_format, LogFormat::Json);

    let job = cli.command.into_job(Config::default()).unwrap();
    let dictionary = &job.config.dictionary;
    assert_eq!(job.kind, CardKind::Characters);
    assert_eq!(dictionary.source, "baidu");
    assert_eq!(dictionary.concurrency, 4);
    assert_eq!(dictionary.timeout_seconds, 7);
    assert_eq!(dictionary.on_fetch_error, FetchErrorPolicy::Skip);
}

#[test]
fn test_config_kept_without_flags() {
    let mut config = Config::default();
    config.dictionary.source = "baidu".to_string();

    let cli = parse(&["chars", "in.txt", "out.txt"]).unwrap();
    let job = cli.command.into_job(config).unwrap();

    assert_eq!(job.config.dictionary.source, "baidu");
    assert_eq!(job.config.dictionary.on_fetch_error, FetchErrorPolicy::Abort);
}

#[test]
fn test_invalid_flag_values_rejected() {
    assert!(parse(&["chars", "--concurrency", "0", "in.txt", "out.txt"]).is_err());
    assert!(parse(&["chars", "--on-fetch-error", "retry", "in.txt", "out.txt"]).is_err());
}

#[test]
fn test_zero_timeout_rejected() {
    let cli = parse(&["chars", "--timeout", "0", "in.txt", "out.txt"]).unwrap();
    assert!(cli.command.into_job(Config::default()).is_err());
}

#[test]
fn test_output_cannot_be_an_input() {
    let cli = parse(&["words", "same.txt", "same.txt"]).unwrap();
    assert!(cli.command.into_job(Config::default()).is_err());
}

#[test]
fn test_empty_marker_or_separator_from_config_file_rejected() {
    for json in [
        r#"{ "input": { "chapter_marker": "" } }"#,
        r#"{ "input": { "separator": "" } }"#,
    ] {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{json}").unwrap();
        let config = load_config(Some(file.path())).unwrap();

        let cli = parse(&["words", "in.txt", "out.txt"]).unwrap();
        let err = cli.command.into_job(config).err().unwrap();
        assert!(err.to_string().contains("must not be empty"), "{json}: {err}");
    }
}

#[test]
fn test_config_file_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "dictionary": {{ "source": "baidu", "concurrency": 2 }}, "input": {{ "separator": "," }} }}"#
    )
    .unwrap();

    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.dictionary.source, "baidu");
    assert_eq!(config.dictionary.concurrency, 2);
    assert_eq!(config.dictionary.timeout_seconds, 30);
    assert_eq!(config.input.separator, ",");
    assert_eq!(config.input.chapter_marker, "#");
}

#[test]
fn test_bad_config_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_config(Some(&dir.path().join("missing.json"))).is_err());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    assert!(load_config(Some(file.path())).is_err());
}
