use eframe::egui::{self, Align, Layout, Margin, RichText, Stroke};

use super::style;
use crate::form::{FormController, FormField, SubmissionStatus};
use crate::submission::DESCRIPTION_MAX_LEN;

const LINK_HELP: &str = "GitHub, live demo, or documentation";
const CONFIRMATION_BODY: &str =
    "Thanks for submitting. We'll review your demo and follow up a few days before the event.";

/// Render the confirmation once accepted, otherwise the input form.
pub(super) fn render(controller: &mut FormController, ui: &mut egui::Ui) {
    if matches!(controller.status(), SubmissionStatus::Success) {
        render_confirmation(ui);
        return;
    }
    render_form(controller, ui);
}

fn render_confirmation(ui: &mut egui::Ui) {
    let palette = style::palette();
    ui.add_space(64.0);
    ui.vertical_centered(|ui| {
        egui::Frame::new()
            .stroke(Stroke::new(1.0, palette.border))
            .corner_radius(24.0)
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.label(RichText::new("✔").size(22.0).color(palette.text_primary));
            });
        ui.add_space(16.0);
        ui.label(
            RichText::new("Demo submitted")
                .size(20.0)
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(8.0);
        ui.label(RichText::new(CONFIRMATION_BODY).size(13.0).color(palette.text_muted));
    });
    ui.add_space(64.0);
}

fn render_form(controller: &mut FormController, ui: &mut egui::Ui) {
    ui.with_layout(Layout::top_down(Align::Min), |ui| {
        for field in FormField::ALL {
            render_field(controller, ui, field);
            ui.add_space(20.0);
        }

        if let Some(message) = controller.error_message() {
            render_error_banner(ui, message);
            ui.add_space(16.0);
        }

        if render_submit_button(ui, controller.is_submitting()) {
            controller.submit();
        }
    });
}

fn render_field(controller: &mut FormController, ui: &mut egui::Ui, field: FormField) {
    let palette = style::palette();
    let hint = controller
        .state
        .field_hint
        .filter(|hint| hint.field == field);
    let focus_requested = controller.state.focus_requested == Some(field);

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        ui.label(RichText::new(field.label()).size(13.0));
        if field.is_required() {
            ui.label(RichText::new("*").size(13.0).color(palette.text_muted));
        }
    });
    ui.add_space(6.0);

    let value = controller.field_mut(field);
    let response = if field.is_multiline() {
        let mut edit = egui::TextEdit::multiline(value)
            .hint_text(field.placeholder())
            .desired_width(f32::INFINITY)
            .desired_rows(if field == FormField::Description { 5 } else { 3 });
        if field == FormField::Description {
            // Counts chars, so astral characters still need the clamp below.
            edit = edit.char_limit(DESCRIPTION_MAX_LEN);
        }
        ui.add(edit)
    } else {
        ui.add(
            egui::TextEdit::singleline(value)
                .hint_text(field.placeholder())
                .desired_width(f32::INFINITY)
                .margin(Margin::symmetric(8, 10)),
        )
    };
    if focus_requested {
        response.request_focus();
        controller.state.focus_requested = None;
    }
    if response.changed() {
        if field == FormField::Description {
            controller.clamp_description();
        }
        if hint.is_some() {
            controller.state.field_hint = None;
        }
    }

    if field == FormField::Description {
        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
            ui.label(
                RichText::new(controller.char_counter_label())
                    .size(12.0)
                    .monospace()
                    .color(palette.text_muted),
            );
        });
    }
    if field == FormField::Link {
        ui.label(RichText::new(LINK_HELP).size(12.0).color(palette.text_muted));
    }
    if let Some(hint) = hint {
        ui.label(RichText::new(hint.to_string()).size(12.0).color(palette.destructive));
    }
}

fn render_error_banner(ui: &mut egui::Ui, message: &str) {
    let palette = style::palette();
    egui::Frame::new()
        .fill(palette.destructive_bg)
        .stroke(Stroke::new(1.0, palette.destructive.gamma_multiply(0.5)))
        .corner_radius(6.0)
        .inner_margin(Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(message).size(14.0).color(palette.destructive));
        });
}

/// Returns true when the button was clicked this frame.
fn render_submit_button(ui: &mut egui::Ui, submitting: bool) -> bool {
    let size = egui::vec2(ui.available_width(), 40.0);
    if submitting {
        ui.add_enabled_ui(false, |ui| {
            ui.allocate_ui_with_layout(size, Layout::left_to_right(Align::Center), |ui| {
                ui.add(egui::Spinner::new().size(16.0));
                ui.add(egui::Button::new("Submitting...").min_size(ui.available_size()));
            });
        });
        return false;
    }
    ui.add(egui::Button::new(RichText::new("Submit demo").strong()).min_size(size))
        .clicked()
}
