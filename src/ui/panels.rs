use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::data::filter::{SiteSelection, ALL_SITES};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – controls
// ---------------------------------------------------------------------------

/// Render the site dropdown and the payload range sliders.
pub fn control_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    // ---- Site dropdown ----
    ui.strong("Launch Site");
    let current = state.controls.site.clone();
    let mut picked: Option<String> = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(current.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == SiteSelection::All, SiteSelection::All.label())
                .clicked()
            {
                picked = Some(ALL_SITES.to_string());
            }
            for site in &state.dataset.sites {
                let is_current = matches!(&current, SiteSelection::Site(s) if s == site);
                if ui.selectable_label(is_current, site).clicked() {
                    picked = Some(site.clone());
                }
            }
        });
    if let Some(value) = picked {
        state.set_site(SiteSelection::from_value(&value));
    }

    ui.add_space(8.0);
    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (Kg):");
    let bounds = state.config.slider_bounds;
    let step = state.config.slider_step;

    let mut low = state.controls.payload.min;
    let low_changed = ui
        .add(
            Slider::new(&mut low, bounds.min..=bounds.max)
                .step_by(step)
                .text("min"),
        )
        .changed();
    if low_changed {
        state.set_payload_min(low);
    }

    let mut high = state.controls.payload.max;
    let high_changed = ui
        .add(
            Slider::new(&mut high, bounds.min..=bounds.max)
                .step_by(step)
                .text("max"),
        )
        .changed();
    if high_changed {
        state.set_payload_max(high);
    }

    if let Some((lo, hi)) = state.dataset.payload_bounds {
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("Dataset payload: {lo:.0} – {hi:.0} kg"))
                .small()
                .weak(),
        );
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} launches loaded, {} in scatter",
            state.dataset.len(),
            state.scatter_indices.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launches from {} with sites {:?}",
                    dataset.len(),
                    path.display(),
                    dataset.sites
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
