// src/gui/loading.rs
//
// Background dataset load. The worker thread parks its result in a shared
// slot and asks for a repaint; the UI thread picks it up on the next frame.

use std::{
    sync::{Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    config::options::DataSource,
    loader::{self, LoadError},
    record::Record,
};

pub type LoadResult = Result<Vec<Record>, LoadError>;
pub type LoadSlot = Arc<Mutex<Option<LoadResult>>>;

pub fn set_status(status: &Mutex<String>, msg: impl Into<String>) {
    if let Ok(mut s) = status.lock() {
        *s = msg.into();
    }
}

/// Start loading `source`; the returned slot fills exactly once.
pub fn spawn(source: DataSource, ctx: egui::Context, status: Arc<Mutex<String>>) -> LoadSlot {
    let slot: LoadSlot = Arc::new(Mutex::new(None));
    let out = slot.clone();

    set_status(&status, format!("Loading {source}…"));

    thread::spawn(move || {
        let res = loader::load(&source);
        let msg = match &res {
            Ok(records) => format!("Loaded {} libraries", records.len()),
            Err(e) => format!("Error: {e}"),
        };
        set_status(&status, msg);

        if let Ok(mut guard) = out.lock() {
            *guard = Some(res);
        }
        ctx.request_repaint();
    });

    slot
}

/// Take the result if the worker has finished.
pub fn take(slot: &LoadSlot) -> Option<LoadResult> {
    slot.lock().ok().and_then(|mut guard| guard.take())
}
