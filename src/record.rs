// src/record.rs
//! One institution from the dataset, plus the flag and project-affiliation
//! rules every other layer reads it through.
//!
//! Boolean fields in the published JSON are not always clean booleans, so
//! each one is read as a [`Flag`] that remembers whether the raw value was a
//! literal `true` or merely truthy. Filters and stats only accept literal
//! `true`; the affiliation guard is configurable (see [`AffiliationRule`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Tri-state reading of a JSON "boolean" field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Literal `true`
    True,
    /// Not `true`, but truthy: non-zero number, non-empty string, array or object
    Truthy,
    /// `false`, `null`, `0`, `""` or missing
    #[default]
    False,
}

impl Flag {
    pub fn from_json(v: &Value) -> Self {
        match v {
            Value::Bool(true) => Flag::True,
            Value::Bool(false) | Value::Null => Flag::False,
            Value::Number(n) => {
                if n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()) { Flag::Truthy } else { Flag::False }
            }
            Value::String(s) => if s.is_empty() { Flag::False } else { Flag::Truthy },
            Value::Array(_) | Value::Object(_) => Flag::Truthy,
        }
    }

    /// Exactly `true` in the source data.
    #[inline]
    pub fn is_true(self) -> bool { self == Flag::True }

    #[inline]
    pub fn is_truthy(self) -> bool { self != Flag::False }
}

impl From<bool> for Flag {
    fn from(b: bool) -> Self {
        if b { Flag::True } else { Flag::False }
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let v = Value::deserialize(d)?;
        Ok(Flag::from_json(&v))
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_bool(self.is_true())
    }
}

/// When a record's project fields count as present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AffiliationRule {
    /// `is_part_of` exactly `true` and a non-empty project name
    #[default]
    Strict,
    /// Any truthy `is_part_of` and a non-empty project name
    Truthy,
}

impl FromStr for AffiliationRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(AffiliationRule::Strict),
            "truthy" | "loose" => Ok(AffiliationRule::Truthy),
            other => Err(format!("Unknown affiliation rule: {other} (expected strict|truthy)")),
        }
    }
}

impl fmt::Display for AffiliationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AffiliationRule::Strict => f.write_str("strict"),
            AffiliationRule::Truthy => f.write_str("truthy"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub library: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub nation: String,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub iiif: Flag,

    #[serde(default, rename = "is_free_cultural_works_license", alias = "isFreeCulturalWorksLicense")]
    pub free_license: Flag,

    #[serde(default, alias = "isPartOf")]
    pub is_part_of: Flag,

    #[serde(default, alias = "isPartOfProjectName")]
    pub is_part_of_project_name: Option<String>,

    #[serde(default, alias = "isPartOfUrl")]
    pub is_part_of_url: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|v| !v.is_empty())
}

impl Record {
    pub fn new(library: &str, nation: &str) -> Self {
        Self { library: library.into(), nation: nation.into(), ..Self::default() }
    }

    pub fn city(&self) -> Option<&str> { non_empty(&self.city) }

    /// Outbound link; empty strings count as absent.
    pub fn website(&self) -> Option<&str> { non_empty(&self.website) }

    /// Project name when the record passes the affiliation guard.
    pub fn project(&self, rule: AffiliationRule) -> Option<&str> {
        let affiliated = match rule {
            AffiliationRule::Strict => self.is_part_of.is_true(),
            AffiliationRule::Truthy => self.is_part_of.is_truthy(),
        };
        if affiliated { non_empty(&self.is_part_of_project_name) } else { None }
    }

    /// Project link, only alongside a guarded project name.
    pub fn project_url(&self, rule: AffiliationRule) -> Option<&str> {
        self.project(rule).and(non_empty(&self.is_part_of_url))
    }
}
