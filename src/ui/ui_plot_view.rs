use std::hash::{Hash, Hasher};

use eframe::egui;
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Plot};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::{DailyBar, ReferenceBar};
use crate::models::PivotLevels;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::maths_utils;
use crate::utils::time_utils;

// Import the Layer System
use crate::ui::plot_layers::{
    CandleLayer, CprBandLayer, LayerContext, PivotLineLayer, PlotLayer, ReferenceLevelLayer,
};

/// One daily bar placed on the plot's x axis.
#[derive(Clone)]
pub struct CandleGeometry {
    pub x: f64,
    pub bar: DailyBar,
    pub date_label: String,
}

#[derive(Clone)]
pub struct PlotCache {
    pub chart_hash: u64,
    pub candles: Vec<CandleGeometry>,
    pub date_labels: Vec<String>,
    pub y_min: f64,
    pub y_max: f64,
    pub x_min: f64,
    pub x_max: f64,
}

#[derive(Default)]
pub struct PlotView {
    cache: Option<PlotCache>,
}

impl PlotView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    pub fn show_levels_plot(
        &mut self,
        ui: &mut egui::Ui,
        bars: &[DailyBar],
        reference: &ReferenceBar,
        levels: &PivotLevels,
    ) {
        let cache = self.calculate_plot_data(bars, levels);
        let legend = Legend::default().position(Corner::RightTop);

        let (y_min, y_max) = (cache.y_min, cache.y_max);
        let (x_min, x_max) = (cache.x_min, cache.x_max);

        Plot::new("levels_plot")
            .legend(legend)
            .custom_x_axes(vec![create_x_axis(&cache)])
            .custom_y_axes(vec![create_y_axis()])
            // Suppress default hover labels; the candle tooltip covers it
            .label_formatter(|_, _| String::new())
            .x_grid_spacer(move |input| {
                // One mark per session; fractional positions carry no meaning
                let mut marks = Vec::new();
                let (min, max) = input.bounds;
                let start = min.ceil() as i64;
                let end = max.floor() as i64;
                for i in start..=end {
                    marks.push(egui_plot::GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    });
                }
                marks
            })
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_y(y_min..=y_max);
                plot_ui.set_plot_bounds_x(x_min..=x_max);

                // --- LAYER RENDERING SYSTEM ---

                // 1. Create Context
                let ctx = LayerContext {
                    levels,
                    reference,
                    cache: &cache,
                    x_min,
                    x_max,
                };

                // 2. Define Layer Stack (Back to Front)
                let layers: Vec<Box<dyn PlotLayer>> = vec![
                    Box::new(CprBandLayer),
                    Box::new(PivotLineLayer),
                    Box::new(ReferenceLevelLayer),
                    Box::new(CandleLayer),
                ];

                // 3. Render Loop
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }

    fn calculate_plot_data(&mut self, bars: &[DailyBar], levels: &PivotLevels) -> PlotCache {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        bars.len().hash(&mut hasher);
        if let (Some(first), Some(last)) = (bars.first(), bars.last()) {
            first.date.hash(&mut hasher);
            last.date.hash(&mut hasher);
            last.close.to_bits().hash(&mut hasher);
        }
        levels.central_pivot.to_bits().hash(&mut hasher);
        let current_hash = hasher.finish();

        if let Some(cache) = &self.cache {
            if cache.chart_hash == current_hash {
                return cache.clone();
            }
        }

        let candles: Vec<CandleGeometry> = bars
            .iter()
            .enumerate()
            .map(|(i, bar)| CandleGeometry {
                x: i as f64,
                bar: *bar,
                date_label: time_utils::format_date(bar.date),
            })
            .collect();
        let date_labels: Vec<String> = candles.iter().map(|c| c.date_label.clone()).collect();

        // Y range must hold every candle extreme and every drawn level
        let lows: Vec<f64> = bars.iter().map(|bar| bar.low).collect();
        let highs: Vec<f64> = bars.iter().map(|bar| bar.high).collect();
        let mut y_min = levels.s3;
        let mut y_max = levels.r3;
        if !bars.is_empty() {
            y_min = y_min.min(maths_utils::get_min(&lows));
            y_max = y_max.max(maths_utils::get_max(&highs));
        }
        let margin = (y_max - y_min) * PLOT_CONFIG.y_margin_pct;
        y_min -= margin;
        y_max += margin;

        let cache = PlotCache {
            chart_hash: current_hash,
            candles,
            date_labels,
            y_min,
            y_max,
            x_min: -0.5,
            x_max: bars.len().saturating_sub(1) as f64 + 0.5,
        };

        self.cache = Some(cache.clone());
        cache
    }
}

// Helpers retained locally for axis construction
fn create_x_axis(plot_cache: &PlotCache) -> AxisHints<'static> {
    let date_labels = plot_cache.date_labels.clone();
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(move |grid_mark, _range| {
            let index = grid_mark.value.round();
            if (grid_mark.value - index).abs() > 0.01 || index < 0.0 {
                return String::new();
            }
            date_labels
                .get(index as usize)
                .cloned()
                .unwrap_or_default()
        })
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .formatter(|grid_mark, _range| format!("{:.2}", grid_mark.value))
        .placement(HPlacement::Left)
}
