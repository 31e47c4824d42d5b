use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, panels, table};

const PIE_HEIGHT: f32 = 280.0;
const SCATTER_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: dropdown + payload sliders ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::control_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: launches behind the scatter chart ----
        egui::TopBottomPanel::bottom("records_panel")
            .resizable(true)
            .default_height(200.0)
            .show(ctx, |ui| {
                table::records_table(ui, &self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new("SpaceX Launch Records Dashboard").size(28.0));
            });
            ui.separator();
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    charts::pie_chart(ui, &self.state, PIE_HEIGHT);
                    ui.add_space(12.0);
                    charts::scatter_chart(ui, &self.state, SCATTER_HEIGHT);
                });
        });
    }
}
