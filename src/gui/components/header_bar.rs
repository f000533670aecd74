// src/gui/components/header_bar.rs
//
// Title, data source, status line and the theme toggle.

use eframe::egui::{self, Align, Layout, RichText};

use crate::{config::state::Theme, gui::app::{App, TITLE}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading(TITLE);
        ui.label(RichText::new(app.state.options.source.to_string()).weak().monospace());

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let (icon, hint) = match app.theme() {
                Theme::Light => ("🌙", "Switch to dark theme"),
                Theme::Dark => ("☀", "Switch to light theme"),
            };
            if ui.button(icon).on_hover_text(hint).clicked() {
                let ctx = ui.ctx().clone();
                app.toggle_theme(&ctx);
            }

            ui.label(RichText::new(app.status_text()).small());
        });
    });
}
