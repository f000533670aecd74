// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::{AppState, Theme},
    present::Presenter,
    store,
    view::{FilterPatch, SortKey, ViewModel},
};

use super::{
    components::{data_table, filter_bar, header_bar, stats_bar},
    loading::{self, LoadSlot},
    screen::{LoadState, Screen},
};

pub const TITLE: &str = "DMMapp Library Dashboard";

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        TITLE,
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc, state)))),
    )?;
    Ok(())
}

pub struct App {
    pub state: AppState,

    // single source of truth for records, sort and filters (UI thread only)
    pub vm: ViewModel,

    // last presented view + dropdown options + load state
    pub screen: Screen,

    // status line (loader thread writes here)
    pub status: Arc<Mutex<String>>,

    // in-flight load, if any
    pending: Option<LoadSlot>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, mut state: AppState) -> Self {
        let saved = store::load_theme();
        let system = cc.egui_ctx.system_theme().map(theme_from_egui);
        let theme = Theme::resolve(saved, system);
        cc.egui_ctx.set_theme(theme_to_egui(theme));
        state.gui.theme = Some(theme);

        logf!(
            "Init: source={} affiliation={} theme={}",
            state.options.source,
            state.options.affiliation,
            theme
        );

        let status = Arc::new(Mutex::new(String::from("Idle")));
        let pending = Some(loading::spawn(
            state.options.source.clone(),
            cc.egui_ctx.clone(),
            status.clone(),
        ));

        Self {
            vm: ViewModel::with_rule(state.options.affiliation),
            state,
            screen: Screen::default(),
            status,
            pending,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        loading::set_status(&self.status, msg);
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.state.gui.theme.unwrap_or_default()
    }

    /* ---------- view model operations ---------- */

    pub fn sort(&mut self, key: SortKey) {
        let view = self.vm.set_sort(key);
        self.screen.present(&view);
        logf!("UI: Sort {} {}", key, self.screen.view.sort.direction.short());
    }

    pub fn apply_filter(&mut self, patch: FilterPatch) {
        logf!("UI: Filter {:?}", patch);
        let view = self.vm.set_filter(patch);
        self.screen.present(&view);
    }

    pub fn clear_filters(&mut self) {
        logf!("UI: Clear filters");
        let view = self.vm.clear_filters();
        self.screen.present(&view);
    }

    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        let theme = self.theme().toggled();
        self.state.gui.theme = Some(theme);
        ctx.set_theme(theme_to_egui(theme));

        match store::save_theme(theme) {
            Ok(p) => logf!("UI: Theme → {} (saved {})", theme, p.display()),
            Err(e) => loge!("UI: Theme save failed: {}", e),
        }
    }

    /// Hand a finished background load to the view model.
    fn poll_load(&mut self) {
        let Some(res) = self.pending.as_ref().and_then(loading::take) else { return };
        self.pending = None;

        match res {
            Ok(records) => {
                let view = self.vm.initialize(records);
                self.screen.present(&view);
                self.status(format!("Ready: {} libraries", self.screen.view.len()));
            }
            Err(e) => {
                self.screen.load_failed(&e);
            }
        }
    }
}

fn theme_from_egui(t: egui::Theme) -> Theme {
    match t {
        egui::Theme::Dark => Theme::Dark,
        egui::Theme::Light => Theme::Light,
    }
}

fn theme_to_egui(t: Theme) -> egui::Theme {
    match t {
        Theme::Dark => egui::Theme::Dark,
        Theme::Light => egui::Theme::Light,
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            header_bar::draw(ui, self);
        });

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_enabled_ui(self.screen.is_loaded(), |ui| {
                filter_bar::draw(ui, self);
            });
            ui.separator();
            stats_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.screen.load.clone() {
                LoadState::Loading => {
                    ui.centered_and_justified(|ui| {
                        ui.add(egui::Spinner::new().size(32.0));
                    });
                }
                LoadState::Failed(msg) => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.label(
                            egui::RichText::new("Error loading data")
                                .heading()
                                .color(ui.visuals().error_fg_color),
                        );
                        ui.label(egui::RichText::new(msg).small());
                    });
                }
                LoadState::Loaded => data_table::draw(ui, self),
            }
        });
    }
}
