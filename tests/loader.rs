// tests/loader.rs
use std::fs;
use std::io::Write;

use dmm_dashboard::config::options::DataSource;
use dmm_dashboard::loader::{self, LoadError};
use dmm_dashboard::record::{AffiliationRule, Flag};

const SAMPLE: &str = r#"[
  {
    "library": "Abbey Library",
    "nation": "CH",
    "city": "St. Gallen",
    "website": "https://www.stiftsbezirk.ch",
    "iiif": true,
    "is_free_cultural_works_license": true,
    "is_part_of": true,
    "is_part_of_project_name": "e-codices",
    "is_part_of_url": "https://www.e-codices.unifr.ch"
  },
  {
    "library": "Cologny",
    "nation": null,
    "city": "Geneva",
    "website": "",
    "iiif": "yes",
    "isFreeCulturalWorksLicense": 1,
    "isPartOf": "true",
    "isPartOfProjectName": "e-codices"
  },
  { "library": "Bare" }
]"#;

#[test]
fn loads_records_from_file_in_source_order() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(SAMPLE.as_bytes()).unwrap();

    let src = DataSource::Path(f.path().to_path_buf());
    let records = loader::load(&src).unwrap();

    let names: Vec<&str> = records.iter().map(|r| r.library.as_str()).collect();
    assert_eq!(names, ["Abbey Library", "Cologny", "Bare"]);
}

#[test]
fn flags_keep_literal_true_apart_from_truthy() {
    let records = loader::parse_records(SAMPLE, "sample").unwrap();
    let (abbey, cologny, bare) = (&records[0], &records[1], &records[2]);

    assert_eq!(abbey.iiif, Flag::True);
    assert_eq!(abbey.free_license, Flag::True);
    assert_eq!(abbey.project(AffiliationRule::Strict), Some("e-codices"));
    assert_eq!(abbey.project_url(AffiliationRule::Strict), Some("https://www.e-codices.unifr.ch"));

    // camelCase names, string/number truthiness
    assert_eq!(cologny.iiif, Flag::Truthy);
    assert_eq!(cologny.free_license, Flag::Truthy);
    assert_eq!(cologny.is_part_of, Flag::Truthy);
    assert_eq!(cologny.project(AffiliationRule::Strict), None);
    assert_eq!(cologny.project(AffiliationRule::Truthy), Some("e-codices"));
    assert_eq!(cologny.project_url(AffiliationRule::Truthy), None);

    assert_eq!(bare.iiif, Flag::False);
    assert_eq!(bare.is_part_of, Flag::False);
    assert!(bare.city().is_none());
}

#[test]
fn null_nation_and_empty_website_read_as_absent() {
    let records = loader::parse_records(SAMPLE, "sample").unwrap();
    assert_eq!(records[1].nation, "");
    assert_eq!(records[2].nation, "");
    assert_eq!(records[1].website(), None);
    assert_eq!(records[0].website(), Some("https://www.stiftsbezirk.ch"));
}

#[test]
fn falsy_values_are_false() {
    let json = r#"[{"library":"X","iiif":0,"is_free_cultural_works_license":"","is_part_of":null}]"#;
    let r = &loader::parse_records(json, "inline").unwrap()[0];
    assert_eq!(r.iiif, Flag::False);
    assert_eq!(r.free_license, Flag::False);
    assert_eq!(r.is_part_of, Flag::False);
}

#[test]
fn empty_array_is_an_empty_dataset() {
    let records = loader::parse_records("[]", "inline").unwrap();
    assert!(records.is_empty());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "[{\"library\": \"Unclosed\"").unwrap();

    let err = loader::load(&DataSource::Path(path.clone())).unwrap_err();
    assert!(err.is_parse());
    assert_eq!(err.location(), path.display().to_string());
    assert!(err.to_string().starts_with("malformed dataset in"));
}

#[test]
fn wrong_shape_is_a_parse_error() {
    // object instead of array
    let err = loader::parse_records(r#"{"library":"A"}"#, "inline").unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));

    // record without a library name
    let err = loader::parse_records(r#"[{"nation":"FR"}]"#, "inline").unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn missing_file_is_a_transport_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    let err = loader::load(&DataSource::Path(path)).unwrap_err();
    assert!(matches!(err, LoadError::Transport { .. }));
    assert!(!err.is_parse());
    assert!(err.to_string().starts_with("failed to load"));
}

#[test]
fn flag_serializes_as_exact_boolean() {
    let records = loader::parse_records(SAMPLE, "sample").unwrap();
    let v = serde_json::to_value(&records[1]).unwrap();
    assert_eq!(v["iiif"], serde_json::Value::Bool(false));
    assert_eq!(v["is_free_cultural_works_license"], serde_json::Value::Bool(false));
    assert_eq!(v["library"], "Cologny");
}
