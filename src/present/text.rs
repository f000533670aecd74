// src/present/text.rs
//
// Plain-text table for terminals: one line per library, columns padded to
// the widest visible value, stats line on top.

use std::fmt::Write;

use crate::loader::LoadError;
use crate::record::{AffiliationRule, Record};
use crate::view::DerivedView;

use super::Presenter;

const HEADERS: [&str; 6] = ["Library", "Nation", "City", "Access", "Project", "Website"];

#[derive(Debug, Default)]
pub struct TextPresenter {
    out: String,
}

impl TextPresenter {
    pub fn new() -> Self { Self::default() }

    pub fn text(&self) -> &str { &self.out }
    pub fn into_text(self) -> String { self.out }
}

fn access(r: &Record) -> String {
    let mut parts = Vec::new();
    if r.iiif.is_true() { parts.push("IIIF"); }
    if r.free_license.is_true() { parts.push("Open"); }
    if parts.is_empty() { "Standard".to_string() } else { parts.join("+") }
}

fn cells(r: &Record, rule: AffiliationRule) -> [String; 6] {
    [
        r.library.clone(),
        r.nation.clone(),
        r.city().unwrap_or("").to_string(),
        access(r),
        r.project(rule).unwrap_or("").to_string(),
        r.website().unwrap_or("No URL").to_string(),
    ]
}

impl Presenter for TextPresenter {
    fn present(&mut self, view: &DerivedView<'_>) {
        self.out.clear();

        let s = &view.stats;
        let _ = writeln!(
            self.out,
            "Libraries: {}  Nations: {}  IIIF: {}  Projects: {}",
            s.total, s.nation_count, s.iiif_count, s.project_count
        );

        if let Some(options) = view.options {
            let _ = writeln!(self.out, "Nation options: {}", options.nations.join(", "));
            let _ = writeln!(self.out, "Project options: {}", options.projects.join(", "));
        }

        if view.is_empty() {
            let _ = writeln!(self.out, "No libraries match the current filters.");
            return;
        }

        let rows: Vec<[String; 6]> = view.iter().map(|r| cells(r, view.rule)).collect();

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut line = |cols: &[&str]| {
            let mut buf = String::new();
            for (i, (cell, w)) in cols.iter().zip(widths).enumerate() {
                if i > 0 { buf.push_str("  "); }
                let _ = write!(buf, "{cell:<w$}");
            }
            let _ = writeln!(self.out, "{}", buf.trim_end());
        };

        line(&HEADERS[..]);
        for row in &rows {
            let cols: Vec<&str> = row.iter().map(String::as_str).collect();
            line(&cols);
        }

        let _ = writeln!(self.out, "Showing {}", s.showing());
    }

    fn load_failed(&mut self, err: &LoadError) {
        self.out.clear();
        let _ = writeln!(self.out, "Error loading data: {err}");
    }
}
