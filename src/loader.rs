// src/loader.rs
//
// Single read of the dataset from a local file or an HTTP(S) URL.
// Two ways to fail, neither retried: the bytes never arrived (Transport),
// or they arrived but are not a JSON array of records (Parse).

use std::{fs, path::Path, time::Duration};

use thiserror::Error;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::config::options::DataSource;
use crate::record::Record;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load {location}: {reason}")]
    Transport { location: String, reason: String },

    #[error("malformed dataset in {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn location(&self) -> &str {
        match self {
            LoadError::Transport { location, .. } | LoadError::Parse { location, .. } => location,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, LoadError::Parse { .. })
    }
}

/// Read and parse the dataset. Records come back in source order.
pub fn load(source: &DataSource) -> Result<Vec<Record>, LoadError> {
    logf!("Load: Begin {}", source);

    let text = match source {
        DataSource::Url(url) => fetch_url(url),
        DataSource::Path(path) => read_path(path),
    };

    let res = text.and_then(|t| parse_records(&t, &source.to_string()));
    match &res {
        Ok(records) => logf!("Load: OK {} (rows={})", source, records.len()),
        Err(e) => loge!("Load: {}", e),
    }
    res
}

/// Parse a JSON array of records. `location` only labels errors.
pub fn parse_records(text: &str, location: &str) -> Result<Vec<Record>, LoadError> {
    serde_json::from_str(text).map_err(|source| LoadError::Parse {
        location: location.to_string(),
        source,
    })
}

fn read_path(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|e| LoadError::Transport {
        location: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn fetch_url(url: &str) -> Result<String, LoadError> {
    let transport = |reason: String| LoadError::Transport { location: url.to_string(), reason };

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| transport(e.to_string()))?;

    let resp = client.get(url).send().map_err(|e| transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(transport(format!(
            "HTTP {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        )));
    }

    resp.text().map_err(|e| transport(e.to_string()))
}
