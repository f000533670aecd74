// src/gui/components/stats_bar.rs

use eframe::egui::{self, RichText};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let s = app.screen.view.stats;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 24.0;
        stat(ui, s.total, "Libraries");
        stat(ui, s.nation_count, "Nations");
        stat(ui, s.iiif_count, "IIIF");
        stat(ui, s.project_count, "Projects");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("Showing {}", s.showing()));
        });
    });
}

fn stat(ui: &mut egui::Ui, n: usize, label: &str) {
    ui.vertical(|ui| {
        ui.label(RichText::new(n.to_string()).size(20.0).strong());
        ui.label(RichText::new(label).small().weak());
    });
}
