// src/present/json.rs
use crate::view::DerivedView;

use super::Presenter;

/// Visible records as a pretty-printed JSON array, in display order.
#[derive(Debug, Default)]
pub struct JsonPresenter {
    out: String,
}

impl JsonPresenter {
    pub fn new() -> Self { Self::default() }

    pub fn json(&self) -> &str { &self.out }
    pub fn into_json(self) -> String { self.out }
}

impl Presenter for JsonPresenter {
    fn present(&mut self, view: &DerivedView<'_>) {
        let rows: Vec<_> = view.iter().collect();
        self.out = match serde_json::to_string_pretty(&rows) {
            Ok(s) => s,
            Err(e) => {
                loge!("Json: serialize failed: {}", e);
                String::from("[]")
            }
        };
    }
}
