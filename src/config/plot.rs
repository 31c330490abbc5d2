//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub bull_candle_color: Color32,
    pub bear_candle_color: Color32,
    pub cpr_band_color: Color32,
    pub central_pivot_color: Color32,
    pub resistance_line_color: Color32,
    pub support_line_color: Color32,
    pub prev_level_color: Color32,
    pub prev_close_color: Color32,
    /// Width of dashed pivot/support/resistance lines
    pub level_line_width: f32,
    /// Width of candle wick lines
    pub wick_line_width: f32,
    /// Candle body half-width in index units (bars sit at integer x)
    pub candle_half_width: f64,
    /// Transparency for the CPR band rectangle (0.0 = invisible, 1.0 = opaque)
    pub cpr_fill_opacity_pct: f32,
    /// Extra headroom above/below the level extremes, as a fraction of range
    pub y_margin_pct: f64,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    bull_candle_color: Color32::from_rgb(0, 200, 0),      // Green
    bear_candle_color: Color32::from_rgb(200, 0, 0),      // Red
    cpr_band_color: Color32::from_rgb(255, 165, 0),       // Orange
    central_pivot_color: Color32::from_rgb(255, 165, 0),  // Orange
    resistance_line_color: Color32::from_rgb(0, 200, 0),  // Green
    support_line_color: Color32::from_rgb(200, 0, 0),     // Red
    prev_level_color: Color32::from_rgb(100, 149, 237),   // Cornflower blue
    prev_close_color: Color32::GRAY,
    level_line_width: 1.5,
    wick_line_width: 1.5,
    candle_half_width: 0.3,
    cpr_fill_opacity_pct: 0.2,
    y_margin_pct: 0.01,
};
