// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use dmm_dashboard::{
    config::{options::AppOptions, state::AppState},
    gui, log, loge,
};
use eframe::egui::{IconData, ViewportBuilder};

fn app_icon() -> Option<IconData> {
    let img = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/dmm.png"
    )));
    match img {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (w, h) = rgba.dimensions();
            Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
        }
        Err(e) => {
            loge!("Icon: decode failed: {}", e);
            None
        }
    }
}

fn main() {
    log::init();

    // optional first argument: dataset path or URL
    let mut state = AppState::default();
    if let Some(src) = std::env::args().nth(1) {
        state.options = AppOptions::with_source(&src);
    }

    let mut viewport = ViewportBuilder::default()
        .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
