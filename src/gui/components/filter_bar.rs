// src/gui/components/filter_bar.rs
//
// Search box, nation/project dropdowns, IIIF/Open toggles and Clear.
// Widgets read the view model's filters and collect edits into one patch,
// applied after drawing so the whole frame sees a consistent state.

use eframe::egui::{self, ComboBox, TextEdit};

use crate::{
    config::consts::ALL_LABEL,
    gui::app::App,
    view::{Choice, FilterPatch},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let filters = app.vm.filters().clone();
    let options = &app.screen.options;

    let mut patch = FilterPatch::default();
    let mut clear = false;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 10.0;

        let mut term = filters.search_term.clone();
        let search = TextEdit::singleline(&mut term)
            .hint_text("Search library, city, nation or project")
            .desired_width(280.0);
        if ui.add(search).changed() {
            patch.search_term = Some(term);
        }

        ui.label("Nation:");
        let picked = choice_combo(ui, "nation_filter", &filters.nation, &options.nations);
        if picked != filters.nation {
            patch.nation = Some(picked);
        }

        ui.label("Project:");
        let picked = choice_combo(ui, "project_filter", &filters.project, &options.projects);
        if picked != filters.project {
            patch.project = Some(picked);
        }

        let mut iiif = filters.require_iiif;
        if ui.checkbox(&mut iiif, "IIIF")
            .on_hover_text("International Image Interoperability Framework")
            .changed()
        {
            patch.require_iiif = Some(iiif);
        }

        let mut free = filters.require_free;
        if ui.checkbox(&mut free, "Open license")
            .on_hover_text("Free Cultural Works License")
            .changed()
        {
            patch.require_free = Some(free);
        }

        if ui.add_enabled(!filters.is_default(), egui::Button::new("Clear filters")).clicked() {
            clear = true;
        }
    });

    if clear {
        app.clear_filters();
    } else if !patch.is_empty() {
        app.apply_filter(patch);
    }
}

fn choice_combo(ui: &mut egui::Ui, id: &str, current: &Choice, values: &[String]) -> Choice {
    let mut picked = current.clone();
    ComboBox::from_id_salt(id)
        .selected_text(current.label().to_owned())
        .width(180.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut picked, Choice::All, ALL_LABEL);
            for v in values {
                ui.selectable_value(&mut picked, Choice::Only(v.clone()), v.as_str());
            }
        });
    picked
}
