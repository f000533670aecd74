// src/gui/screen.rs
//
// What the egui frontend keeps between frames: the last computed view
// (as owned row indexes), the dropdown options, and the load state.
// Filled through the same Presenter trait the static renderers use.

use crate::{
    loader::LoadError,
    present::Presenter,
    view::{DerivedView, FilterOptions, ViewSnapshot},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct Screen {
    pub view: ViewSnapshot,
    pub options: FilterOptions,
    pub load: LoadState,
}

impl Screen {
    pub fn is_loaded(&self) -> bool {
        self.load == LoadState::Loaded
    }
}

impl Presenter for Screen {
    fn present(&mut self, view: &DerivedView<'_>) {
        self.view = view.detach();
        // Options only arrive with a fresh dataset.
        if let Some(options) = view.options {
            self.options = options.clone();
            self.load = LoadState::Loaded;
        }
    }

    fn load_failed(&mut self, err: &LoadError) {
        self.view = ViewSnapshot::default();
        self.load = LoadState::Failed(err.to_string());
    }
}
