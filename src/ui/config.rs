use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub bias_narrow: Color32,
    pub bias_wide: Color32,
    pub bias_balanced: Color32,
    pub status_ok: Color32,
    pub status_error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::YELLOW, // Sets every heading
        subsection_heading: Color32::ORANGE, // Sets every subsection heading
        central_panel: Color32::from_rgb(20, 25, 35),
        side_panel: Color32::from_rgb(25, 25, 25),
        bias_narrow: Color32::from_rgb(230, 190, 80),
        bias_wide: Color32::from_rgb(150, 200, 255),
        bias_balanced: Color32::from_rgb(130, 200, 140),
        status_ok: Color32::from_rgb(130, 200, 140),
        status_error: Color32::from_rgb(220, 120, 120),
    },
};
