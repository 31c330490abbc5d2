use eframe::egui::{Color32, Id, LayerId, Order::Tooltip, RichText, Stroke, Ui};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use egui_plot::{HLine, Line, PlotPoints, PlotUi, Polygon};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::ReferenceBar;
use crate::models::PivotLevels;
use crate::ui::ui_plot_view::{CandleGeometry, PlotCache};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_level;

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    pub levels: &'a PivotLevels,
    pub reference: &'a ReferenceBar,
    pub cache: &'a PlotCache,
    pub x_min: f64,
    pub x_max: f64,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. CPR BAND LAYER (The Range Rectangle)
// ============================================================================
pub struct CprBandLayer;

impl PlotLayer for CprBandLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let bottom = ctx.levels.lower_boundary;
        let top = ctx.levels.upper_boundary;

        let points = PlotPoints::new(vec![
            [ctx.x_min, bottom],
            [ctx.x_max, bottom],
            [ctx.x_max, top],
            [ctx.x_min, top],
        ]);

        let fill = PLOT_CONFIG
            .cpr_band_color
            .linear_multiply(PLOT_CONFIG.cpr_fill_opacity_pct);

        let polygon = Polygon::new(UI_TEXT.plot_cpr_label, points)
            .fill_color(fill)
            .stroke(Stroke::new(1.0, PLOT_CONFIG.cpr_band_color));

        plot_ui.polygon(polygon);
    }
}

// ============================================================================
// 2. PIVOT LINE LAYER (CP plus R1-R3 / S1-S3)
// ============================================================================
pub struct PivotLineLayer;

impl PlotLayer for PivotLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let levels = ctx.levels;
        let lines: [(&str, f64, Color32); 7] = [
            ("CP", levels.central_pivot, PLOT_CONFIG.central_pivot_color),
            ("R1", levels.r1, PLOT_CONFIG.resistance_line_color),
            ("R2", levels.r2, PLOT_CONFIG.resistance_line_color),
            ("R3", levels.r3, PLOT_CONFIG.resistance_line_color),
            ("S1", levels.s1, PLOT_CONFIG.support_line_color),
            ("S2", levels.s2, PLOT_CONFIG.support_line_color),
            ("S3", levels.s3, PLOT_CONFIG.support_line_color),
        ];

        for (label, value, color) in lines {
            plot_ui.hline(
                HLine::new(label, value)
                    .color(color)
                    .width(PLOT_CONFIG.level_line_width)
                    .style(egui_plot::LineStyle::dashed_loose()),
            );
        }
    }
}

// ============================================================================
// 3. REFERENCE LEVEL LAYER (Previous session's extremes)
// ============================================================================
pub struct ReferenceLevelLayer;

impl PlotLayer for ReferenceLevelLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let reference = ctx.reference;
        let lines: [(&str, f64, Color32); 3] = [
            (UI_TEXT.label_prev_high, reference.high, PLOT_CONFIG.prev_level_color),
            (UI_TEXT.label_prev_low, reference.low, PLOT_CONFIG.prev_level_color),
            (UI_TEXT.label_prev_close, reference.close, PLOT_CONFIG.prev_close_color),
        ];

        for (label, value, color) in lines {
            plot_ui.hline(
                HLine::new(label, value)
                    .color(color)
                    .width(PLOT_CONFIG.level_line_width)
                    .style(egui_plot::LineStyle::dashed_loose()),
            );
        }
    }
}

// ============================================================================
// 4. CANDLE LAYER (Daily bars, drawn last so they sit on top)
// ============================================================================
pub struct CandleLayer;

impl PlotLayer for CandleLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for candle in &ctx.cache.candles {
            draw_candle(plot_ui, candle);
        }

        render_candle_tooltip(plot_ui, ctx);
    }
}

// ============================================================================
// HELPER FUNCTIONS (Private to this module)
// ============================================================================

fn draw_candle(plot_ui: &mut PlotUi, candle: &CandleGeometry) {
    let bar = &candle.bar;
    let color = if bar.is_bullish() {
        PLOT_CONFIG.bull_candle_color
    } else {
        PLOT_CONFIG.bear_candle_color
    };

    let (body_low, body_high) = bar.body_range();
    let half_width = PLOT_CONFIG.candle_half_width;

    // Body rectangle
    let body = PlotPoints::new(vec![
        [candle.x - half_width, body_low],
        [candle.x + half_width, body_low],
        [candle.x + half_width, body_high],
        [candle.x - half_width, body_high],
    ]);
    plot_ui.polygon(
        Polygon::new(UI_TEXT.plot_candles_label, body)
            .fill_color(color)
            .stroke(Stroke::new(1.0, color)),
    );

    // Wicks above and below the body
    let upper_wick = PlotPoints::new(vec![[candle.x, body_high], [candle.x, bar.high]]);
    let lower_wick = PlotPoints::new(vec![[candle.x, bar.low], [candle.x, body_low]]);
    plot_ui.line(
        Line::new(UI_TEXT.plot_candles_label, upper_wick)
            .color(color)
            .width(PLOT_CONFIG.wick_line_width),
    );
    plot_ui.line(
        Line::new(UI_TEXT.plot_candles_label, lower_wick)
            .color(color)
            .width(PLOT_CONFIG.wick_line_width),
    );
}

fn render_candle_tooltip(plot_ui: &mut PlotUi, ctx: &LayerContext) {
    let Some(pointer) = plot_ui.pointer_coordinate() else {
        return;
    };

    let hovered = ctx.cache.candles.iter().find(|candle| {
        (pointer.x - candle.x).abs() <= PLOT_CONFIG.candle_half_width
            && pointer.y >= candle.bar.low
            && pointer.y <= candle.bar.high
    });

    if let Some(candle) = hovered {
        let color = if candle.bar.is_bullish() {
            PLOT_CONFIG.bull_candle_color
        } else {
            PLOT_CONFIG.bear_candle_color
        };

        let tooltip_layer = LayerId::new(Tooltip, Id::new("candle_tooltips"));

        #[allow(deprecated)]
        show_tooltip_at_pointer(
            plot_ui.ctx(),
            tooltip_layer,
            Id::new(format!("tooltip_{}", candle.date_label)),
            |ui: &mut Ui| {
                ui.label(RichText::new(&candle.date_label).strong().color(color));
                ui.separator();
                ui.label(format!("Open:  {}", format_level(candle.bar.open)));
                ui.label(format!("High:  {}", format_level(candle.bar.high)));
                ui.label(format!("Low:   {}", format_level(candle.bar.low)));
                ui.label(format!("Close: {}", format_level(candle.bar.close)));
            },
        );
    }
}
