// src/cli.rs
//
// Headless frontend: load once, apply the requested filters and sorts
// through the view model, print one view.

use std::{fs, io, io::Write, path::PathBuf};

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::{
    config::options::{AppOptions, DataSource},
    loader::{self, LoadError},
    present::{HtmlFlavor, HtmlPresenter, JsonPresenter, Presenter, TextPresenter},
    record::AffiliationRule,
    view::{Choice, DerivedView, FilterPatch, SortKey, ViewModel},
};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Print the DMMapp library dataset as a filtered, sorted table")]
pub struct Args {
    /// Dataset path or http(s) URL
    #[arg(default_value = crate::config::consts::DEFAULT_SOURCE)]
    pub source: DataSource,

    /// Case-insensitive substring over library, city, nation and project
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact nation ("All" for any)
    #[arg(short, long)]
    pub nation: Option<String>,

    /// Exact project name ("All" for any)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Only libraries with IIIF support
    #[arg(long)]
    pub iiif: bool,

    /// Only libraries under a free cultural works license
    #[arg(long)]
    pub free: bool,

    /// Sort by FIELD; repeat a field to flip its direction
    #[arg(long = "sort", value_name = "FIELD")]
    pub sort: Vec<SortKey>,

    /// How project affiliation is read: strict or truthy
    #[arg(long, default_value_t = AffiliationRule::Strict)]
    pub affiliation: AffiliationRule,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Include the nation/project option lists
    #[arg(long)]
    pub options: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    HtmlDocs,
    Json,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

impl Args {
    pub fn app_options(&self) -> AppOptions {
        AppOptions { source: self.source.clone(), affiliation: self.affiliation }
    }

    /// Filter edits requested on the command line, as one patch.
    pub fn filter_patch(&self) -> FilterPatch {
        let mut patch = FilterPatch::default();
        if let Some(s) = &self.search {
            patch = patch.search(s.clone());
        }
        if let Some(n) = &self.nation {
            patch = patch.nation(Choice::parse(n));
        }
        if let Some(p) = &self.project {
            patch = patch.project(Choice::parse(p));
        }
        if self.iiif {
            patch = patch.iiif(true);
        }
        if self.free {
            patch = patch.free(true);
        }
        patch
    }
}

pub fn run(args: Args) -> Result<(), CliError> {
    let opts = args.app_options();
    logf!("CLI: source={} format={:?}", opts.source, args.format);

    let records = match loader::load(&opts.source) {
        Ok(r) => r,
        Err(e) => {
            let mut p = TextPresenter::new();
            p.load_failed(&e);
            eprintln!("{}", p.text().trim_end());
            return Err(e.into());
        }
    };

    let mut vm = ViewModel::with_rule(opts.affiliation);
    vm.initialize(records);

    let patch = args.filter_patch();
    if !patch.is_empty() {
        vm.set_filter(patch);
    }
    for &key in &args.sort {
        vm.set_sort(key);
    }

    let mut view = vm.view();
    if args.options {
        view.options = Some(vm.options());
    }
    let rendered = render(&view, args.format);

    match &args.out {
        Some(path) => {
            fs::write(path, rendered)?;
            logf!("CLI: wrote {} rows to {}", view.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

/// Render one view in the requested format.
pub fn render(view: &DerivedView<'_>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut p = TextPresenter::new();
            p.present(view);
            p.into_text()
        }
        OutputFormat::Html | OutputFormat::HtmlDocs => {
            let flavor = if format == OutputFormat::Html { HtmlFlavor::Generic } else { HtmlFlavor::Docs };
            let mut p = HtmlPresenter::new(flavor);
            p.present(view);
            p.into_html()
        }
        OutputFormat::Json => {
            let mut p = JsonPresenter::new();
            p.present(view);
            p.into_json()
        }
    }
}
