//! egui renderer for the demo submission window.

mod form_view;
pub mod style;

use std::time::Duration;

use eframe::egui;

use crate::config;
use crate::form::FormController;

/// Smallest window size that keeps the form readable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(420.0, 560.0);
const FORM_MAX_WIDTH: f32 = 560.0;
const SUBMIT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Hosts a single [`FormController`] inside an eframe window.
pub struct DemoFormApp {
    controller: FormController,
    visuals_set: bool,
}

impl DemoFormApp {
    /// Create the app, loading the endpoint from persisted configuration.
    pub fn new() -> Result<Self, String> {
        let settings =
            config::load_or_default().map_err(|err| format!("Failed to load config: {err}"))?;
        tracing::info!(endpoint = %settings.endpoint, "Demo form ready");
        Ok(Self::with_controller(FormController::new(settings.endpoint)))
    }

    pub fn with_controller(controller: FormController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }
}

impl eframe::App for DemoFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll();
        if self.controller.is_submitting() {
            ctx.request_repaint_after(SUBMIT_POLL_INTERVAL);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(FORM_MAX_WIDTH);
                        ui.add_space(24.0);
                        form_view::render(&mut self.controller, ui);
                        ui.add_space(24.0);
                    });
                });
        });
    }
}
