// src/present/html.rs
//
// Static HTML rendering of a view. Two flavors share one renderer and differ
// only in class names and a few attributes:
//
// - Generic: the standalone page (bootstrap utility classes).
// - Docs:    the documentation-site theme (BEM classes, `aria-sort`).
//
// Every piece of record text goes through `escape`.

use std::fmt::Write;

use crate::config::consts::ALL_LABEL;
use crate::loader::LoadError;
use crate::record::{AffiliationRule, Record};
use crate::view::{DerivedView, FilterOptions, SortState, Stats};

use super::{COLUMNS, Presenter};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HtmlFlavor {
    #[default]
    Generic,
    Docs,
}

#[derive(Debug, Default)]
pub struct HtmlPresenter {
    flavor: HtmlFlavor,
    out: String,
}

impl HtmlPresenter {
    pub fn new(flavor: HtmlFlavor) -> Self {
        Self { flavor, out: String::new() }
    }

    pub fn html(&self) -> &str { &self.out }
    pub fn into_html(self) -> String { self.out }

    fn stats(&mut self, stats: &Stats) {
        let items = [
            ("statTotal", "Libraries", stats.total),
            ("statNations", "Nations", stats.nation_count),
            ("statIIIF", "IIIF", stats.iiif_count),
            ("statProjects", "Projects", stats.project_count),
        ];
        let class = match self.flavor {
            HtmlFlavor::Generic => "stats row g-3",
            HtmlFlavor::Docs => "dash-stats",
        };
        let _ = writeln!(self.out, r#"<div class="{class}">"#);
        for (id, label, n) in items {
            let _ = match self.flavor {
                HtmlFlavor::Generic => writeln!(
                    self.out,
                    r#"  <div class="col stat-card"><span id="{id}" class="fs-3 fw-bold">{n}</span><div class="text-muted small">{label}</div></div>"#
                ),
                HtmlFlavor::Docs => writeln!(
                    self.out,
                    r#"  <div class="stat"><span id="{id}" class="stat__value">{n}</span><span class="stat__label">{label}</span></div>"#
                ),
            };
        }
        let _ = writeln!(self.out, "</div>");
    }

    fn options(&mut self, options: &FilterOptions) {
        self.select("nationSelect", "Nation", &options.nations);
        self.select("projectSelect", "Project", &options.projects);
    }

    fn select(&mut self, id: &str, label: &str, values: &[String]) {
        let class = match self.flavor {
            HtmlFlavor::Generic => "form-select",
            HtmlFlavor::Docs => "dash-select",
        };
        let _ = writeln!(
            self.out,
            r#"<select id="{id}" class="{class}" aria-label="{label}"><option value="{ALL_LABEL}">{ALL_LABEL}</option>"#
        );
        for v in values {
            let v = escape(v);
            let _ = writeln!(self.out, r#"  <option value="{v}">{v}</option>"#);
        }
        let _ = writeln!(self.out, "</select>");
    }

    fn header(&mut self, sort: &SortState) {
        let _ = writeln!(self.out, "<thead><tr>");
        for (label, key) in COLUMNS {
            let dir = sort.direction_for(key);
            let active = if dir.is_some() { " active" } else { "" };
            let mut attrs = format!(r#"class="sortable{active}" data-sort="{}""#, key.field());
            if let Some(d) = dir {
                let _ = write!(attrs, r#" data-sort-direction="{}""#, d.short());
            }
            if self.flavor == HtmlFlavor::Docs {
                let aria = dir.map(|d| d.aria()).unwrap_or("none");
                let _ = write!(attrs, r#" aria-sort="{aria}""#);
            }
            let _ = writeln!(self.out, "  <th {attrs}>{label}</th>");
        }
        let _ = writeln!(self.out, "</tr></thead>");
    }

    fn row(&mut self, r: &Record, rule: AffiliationRule) {
        let docs = self.flavor == HtmlFlavor::Docs;
        let library = escape(&r.library);
        let nation = escape(&r.nation);
        let city = escape(r.city().unwrap_or(""));

        let project = match (r.project(rule), docs) {
            (Some(name), false) => format!(
                r#"<div class="small mt-1"><a href="{}" target="_blank" rel="noopener noreferrer" class="text-muted text-decoration-none"><i class="bi bi-collection me-1"></i>{}</a></div>"#,
                escape(r.project_url(rule).unwrap_or("")),
                escape(name)
            ),
            (Some(name), true) => format!(
                r#"<div class="library-project"><a href="{}" target="_blank" rel="noopener noreferrer"><i class="bi bi-collection" aria-hidden="true"></i>{}</a></div>"#,
                escape(r.project_url(rule).unwrap_or("")),
                escape(name)
            ),
            (None, _) => String::new(),
        };

        let mut badges = String::new();
        if r.iiif.is_true() {
            badges.push_str(if docs {
                r#"<span class="badge badge--iiif"><i class="bi bi-images" aria-hidden="true"></i>IIIF</span>"#
            } else {
                r#"<span class="badge badge-feature bg-iiif me-1" title="International Image Interoperability Framework"><i class="bi bi-images me-1"></i>IIIF</span>"#
            });
        }
        if r.free_license.is_true() {
            badges.push_str(if docs {
                r#"<span class="badge badge--open"><i class="bi bi-unlock" aria-hidden="true"></i>Open</span>"#
            } else {
                r#"<span class="badge badge-feature bg-free" title="Free Cultural Works License"><i class="bi bi-unlock me-1"></i>Open</span>"#
            });
        }
        if badges.is_empty() {
            badges.push_str(if docs {
                r#"<span class="badge badge--standard">Standard Access</span>"#
            } else {
                r#"<span class="text-muted small fst-italic">Standard Access</span>"#
            });
        }

        let visit = match (r.website(), docs) {
            (Some(url), false) => format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="btn btn-sm btn-outline-primary rounded-pill">Visit <i class="bi bi-arrow-right-short"></i></a>"#,
                escape(url)
            ),
            (Some(url), true) => format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="btn-visit">Visit <i class="bi bi-arrow-right-short" aria-hidden="true"></i></a>"#,
                escape(url)
            ),
            (None, false) => r#"<span class="text-muted small">No URL</span>"#.to_string(),
            (None, true) => r#"<span class="visit-none">No URL</span>"#.to_string(),
        };

        let (nation_class, city_class, end) = if docs {
            ("location-nation", "location-city", r#"style="text-align:right""#)
        } else {
            ("fw-medium", "city-name", r#"class="text-end""#)
        };

        let _ = writeln!(
            self.out,
            r#"  <tr><td><div class="library-name">{library}</div>{project}</td><td><div class="{nation_class}">{nation}</div><div class="{city_class}"><i class="bi bi-dot"></i>{city}</div></td><td>{badges}</td><td {end}>{visit}</td></tr>"#
        );
    }

    fn empty_state(&mut self) {
        let _ = match self.flavor {
            HtmlFlavor::Generic => writeln!(
                self.out,
                r#"<div id="emptyState" class="text-center text-muted py-5">No libraries match the current filters.</div>"#
            ),
            HtmlFlavor::Docs => writeln!(
                self.out,
                r#"<div id="emptyState" class="empty-state">No libraries match the current filters.</div>"#
            ),
        };
    }
}

impl Presenter for HtmlPresenter {
    fn present(&mut self, view: &DerivedView<'_>) {
        self.out.clear();

        self.stats(&view.stats);
        if let Some(options) = view.options {
            self.options(options);
        }

        let _ = writeln!(
            self.out,
            r#"<p class="showing">Showing <span id="showingCount">{}</span></p>"#,
            view.stats.showing()
        );

        if view.is_empty() {
            self.empty_state();
            return;
        }

        let table_class = match self.flavor {
            HtmlFlavor::Generic => "table table-hover align-middle",
            HtmlFlavor::Docs => "dash-table",
        };
        let _ = writeln!(self.out, r#"<table class="{table_class}">"#);
        self.header(&view.sort);
        let _ = writeln!(self.out, r#"<tbody id="tableBody">"#);
        for r in view.iter() {
            self.row(r, view.rule);
        }
        let _ = writeln!(self.out, "</tbody>\n</table>");
    }

    fn load_failed(&mut self, err: &LoadError) {
        self.out.clear();
        let msg = escape(&err.to_string());
        let _ = match self.flavor {
            HtmlFlavor::Generic => writeln!(
                self.out,
                r#"<div class="text-danger text-center"><i class="bi bi-exclamation-triangle fs-1"></i><p class="mt-2">Error loading data<br><small>{msg}</small></p></div>"#
            ),
            HtmlFlavor::Docs => writeln!(
                self.out,
                r#"<div class="dash-error" role="alert"><p>Error loading data</p><small>{msg}</small></div>"#
            ),
        };
    }
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
