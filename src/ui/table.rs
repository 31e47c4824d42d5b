use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::outcome_color;
use crate::data::model::OutcomeClass;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// List the launches currently shown on the scatter chart.
pub fn records_table(ui: &mut Ui, state: &AppState) {
    ui.strong(format!("Launches in range ({})", state.scatter_indices.len()));

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(40.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            let titles = ["#", "Launch Site", "Payload Mass (kg)", "class", "Booster Version Category"];
            for title in titles {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.scatter_indices.len(), |mut row| {
                let idx = state.scatter_indices[row.index()];
                let rec = &state.dataset.records[idx];
                row.col(|ui| {
                    ui.label(idx.to_string());
                });
                row.col(|ui| {
                    ui.label(&rec.site);
                });
                row.col(|ui| {
                    ui.label(format!("{:.0}", rec.payload_mass_kg));
                });
                row.col(|ui| {
                    let text = match rec.outcome {
                        OutcomeClass::Success => "1 (success)",
                        OutcomeClass::Failure => "0 (failure)",
                    };
                    ui.label(RichText::new(text).color(outcome_color(rec.outcome)));
                });
                row.col(|ui| {
                    let color = state.booster_colors.color_for(&rec.booster_category);
                    ui.label(RichText::new(&rec.booster_category).color(color));
                });
            });
        });
}
