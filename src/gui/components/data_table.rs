// src/gui/components/data_table.rs
//
// Draws the live table from the last presented view. Header clicks sort;
// everything else is read-only.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    gui::app::App,
    present::COLUMNS,
    record::{AffiliationRule, Record},
    view::SortKey,
};

const ROW_H: f32 = 40.0;

// Badge colors matched to the page stylesheet
const IIIF_COLOR: Color32 = Color32::from_rgb(0x2B, 0x7B, 0xB9);
const OPEN_COLOR: Color32 = Color32::from_rgb(0x2E, 0x8B, 0x57);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.screen.view.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            let msg = if app.vm.is_empty() {
                "The dataset is empty."
            } else {
                "No libraries match the current filters."
            };
            ui.label(RichText::new(msg).weak());
        });
        return;
    }

    let sort = app.screen.view.sort;
    let rule = app.vm.rule();
    let records = app.vm.records();
    let row_ix = &app.screen.view.row_ix;
    let mut clicked: Option<SortKey> = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::initial(340.0).at_least(120.0).clip(true))
        .column(Column::initial(200.0).at_least(80.0).clip(true))
        .column(Column::initial(160.0).at_least(80.0))
        .column(Column::remainder().at_least(80.0))
        .header(26.0, |mut header| {
            for (label, key) in COLUMNS {
                header.col(|ui| {
                    let text = match sort.direction_for(key) {
                        Some(d) => format!("{label} {}", d.arrow()),
                        None => label.to_string(),
                    };
                    let resp = ui
                        .add(egui::Button::new(RichText::new(text).strong()).frame(false))
                        .on_hover_text(format!("Sort by {}", key.field()));
                    if resp.clicked() {
                        clicked = Some(key);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, row_ix.len(), |mut row| {
                let Some(r) = row_ix.get(row.index()).and_then(|&ix| records.get(ix)) else {
                    return;
                };
                row.col(|ui| library_cell(ui, r, rule));
                row.col(|ui| location_cell(ui, r));
                row.col(|ui| access_cell(ui, r));
                row.col(|ui| website_cell(ui, r));
            });
        });

    if let Some(key) = clicked {
        app.sort(key);
    }
}

fn library_cell(ui: &mut egui::Ui, r: &Record, rule: AffiliationRule) {
    ui.vertical(|ui| {
        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
        ui.label(RichText::new(&r.library).strong());
        if let Some(name) = r.project(rule) {
            match r.project_url(rule) {
                Some(url) => { ui.hyperlink_to(RichText::new(name).small(), url); }
                None => { ui.label(RichText::new(name).small().weak()); }
            }
        }
    });
}

fn location_cell(ui: &mut egui::Ui, r: &Record) {
    ui.vertical(|ui| {
        ui.label(r.nation.as_str());
        if let Some(city) = r.city() {
            ui.label(RichText::new(format!("· {city}")).small().weak());
        }
    });
}

fn access_cell(ui: &mut egui::Ui, r: &Record) {
    let mut any = false;
    if r.iiif.is_true() {
        ui.label(RichText::new("IIIF").strong().color(IIIF_COLOR))
            .on_hover_text("International Image Interoperability Framework");
        any = true;
    }
    if r.free_license.is_true() {
        ui.label(RichText::new("Open").strong().color(OPEN_COLOR))
            .on_hover_text("Free Cultural Works License");
        any = true;
    }
    if !any {
        ui.label(RichText::new("Standard Access").italics().weak());
    }
}

fn website_cell(ui: &mut egui::Ui, r: &Record) {
    match r.website() {
        Some(url) => { ui.hyperlink_to("Visit →", url); }
        None => { ui.label(RichText::new("No URL").small().weak()); }
    }
}
