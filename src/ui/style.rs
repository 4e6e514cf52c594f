use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_input: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub destructive: Color32,
    pub destructive_bg: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(0, 0, 0),
        bg_input: Color32::from_rgb(10, 10, 10),
        border: Color32::from_rgb(38, 38, 42),
        text_primary: Color32::from_rgb(237, 237, 240),
        text_muted: Color32::from_rgb(140, 146, 155),
        accent: Color32::from_rgb(250, 250, 250),
        destructive: Color32::from_rgb(239, 68, 68),
        destructive_bg: Color32::from_rgba_unmultiplied(239, 68, 68, 26),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_input;
    visuals.error_fg_color = palette.destructive;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_primary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rounded(&mut visuals.widgets.inactive, palette);
    set_rounded(&mut visuals.widgets.hovered, palette);
    set_rounded(&mut visuals.widgets.active, palette);
    visuals.popup_shadow = Shadow::NONE;
}

fn set_rounded(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(6);
    vis.bg_stroke = Stroke::new(1.0, palette.border);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}
