// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::consts::*;
use crate::record::AffiliationRule;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub source: DataSource,
    pub affiliation: AffiliationRule,
}

impl AppOptions {
    /// Options with the given source text (path or URL), defaults elsewhere.
    pub fn with_source(text: &str) -> Self {
        Self { source: DataSource::parse(text), ..Self::default() }
    }
}

/// Where the dataset is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    Path(PathBuf),
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Path(PathBuf::from(DEFAULT_SOURCE))
    }
}

impl DataSource {
    /// `http://` and `https://` prefixes select a URL; everything else is a path.
    /// Blank input falls back to the default source.
    pub fn parse(text: &str) -> Self {
        let t = text.trim();
        if t.is_empty() {
            return Self::default();
        }
        let lower = t.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(t.to_string())
        } else {
            DataSource::Path(PathBuf::from(t))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, DataSource::Url(_))
    }
}

impl FromStr for DataSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(u) => f.write_str(u),
            DataSource::Path(p) => write!(f, "{}", p.display()),
        }
    }
}
