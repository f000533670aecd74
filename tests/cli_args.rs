// tests/cli_args.rs
#![cfg(feature = "cli")]

use std::io::Write;

use clap::Parser;
use dmm_dashboard::cli::{self, Args, CliError, OutputFormat};
use dmm_dashboard::config::options::DataSource;
use dmm_dashboard::record::AffiliationRule;
use dmm_dashboard::view::{Choice, SortKey};

fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("cli").chain(argv.iter().copied())).unwrap()
}

#[test]
fn defaults() {
    let a = parse(&[]);
    assert_eq!(a.source, DataSource::default());
    assert_eq!(a.format, OutputFormat::Text);
    assert_eq!(a.affiliation, AffiliationRule::Strict);
    assert!(a.sort.is_empty());
    assert!(a.filter_patch().is_empty());
}

#[test]
fn filters_become_one_patch() {
    let a = parse(&["https://example.org/d.json", "--search", "bod", "--nation", "UK", "--project", "All", "--iiif"]);
    assert!(a.source.is_remote());

    let p = a.filter_patch();
    assert_eq!(p.search_term.as_deref(), Some("bod"));
    assert_eq!(p.nation, Some(Choice::Only("UK".into())));
    assert_eq!(p.project, Some(Choice::All));
    assert_eq!(p.require_iiif, Some(true));
    assert_eq!(p.require_free, None);
}

#[test]
fn repeated_sort_and_enums() {
    let a = parse(&["--sort", "nation", "--sort", "nation", "--format", "html-docs", "--affiliation", "truthy"]);
    assert_eq!(a.sort, [SortKey::Nation, SortKey::Nation]);
    assert_eq!(a.format, OutputFormat::HtmlDocs);
    assert_eq!(a.affiliation, AffiliationRule::Truthy);

    assert!(Args::try_parse_from(["cli", "--sort", "population"]).is_err());
    assert!(Args::try_parse_from(["cli", "--format", "pdf"]).is_err());
}

#[test]
fn run_writes_filtered_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data.json");
    let mut f = std::fs::File::create(&data).unwrap();
    f.write_all(br#"[{"library":"B","nation":"FR","iiif":true},{"library":"A","nation":"DE"}]"#)
        .unwrap();

    let out = dir.path().join("out.json");
    let a = parse(&[
        data.to_str().unwrap(),
        "--iiif",
        "--format",
        "json",
        "--out",
        out.to_str().unwrap(),
    ]);
    cli::run(a).unwrap();

    let v: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v.as_array().map(Vec::len), Some(1));
    assert_eq!(v[0]["library"], "B");
}

#[test]
fn run_reports_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let a = parse(&[missing.to_str().unwrap()]);
    assert!(matches!(cli::run(a), Err(CliError::Load(_))));
}
