// src/present/mod.rs
//! Presentation adapters.
//!
//! The view model never produces markup. Each frontend implements
//! [`Presenter`] and turns a [`DerivedView`] into its own output:
//! HTML for the two page flavors, a plain-text table and JSON for the CLI.
//! The egui app is the interactive presenter and lives in `gui`.

pub mod html;
pub mod json;
pub mod text;

pub use html::{HtmlFlavor, HtmlPresenter};
pub use json::JsonPresenter;
pub use text::TextPresenter;

use crate::loader::LoadError;
use crate::view::{DerivedView, SortKey};

/// Sortable table columns shared by every presenter: (header text, sort field).
pub const COLUMNS: [(&str, SortKey); 4] = [
    ("Library", SortKey::Library),
    ("Location", SortKey::Nation),
    ("Access", SortKey::Iiif),
    ("Website", SortKey::Website),
];

pub trait Presenter {
    /// Draw one computed view. Called after every view model operation.
    fn present(&mut self, view: &DerivedView<'_>);

    /// The dataset could not be loaded; show why and stay "not loaded".
    fn load_failed(&mut self, _err: &LoadError) {}
}

/// A presenter that draws nothing.
pub struct NullPresenter;
impl Presenter for NullPresenter {
    fn present(&mut self, _view: &DerivedView<'_>) {}
}
