use eframe::egui::{
    CentralPanel, Color32, Context, Frame, Grid, RichText, ScrollArea, SidePanel, TopBottomPanel,
};

use crate::models::CprBias;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::ui_panels::{HistoryEvent, HistoryPanel, Panel, PlanFormEvent, PlanFormPanel};
use crate::ui::utils::{format_level, format_pct, section_heading, spaced_separator};
use crate::utils::time_utils;

use super::app::PivotPlannerApp;

impl PivotPlannerApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("left_panel")
            .min_width(260.0)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let can_save = self.data_state.levels.is_some();

                let form_events = {
                    let mut form_panel =
                        PlanFormPanel::new(&mut self.checklist, &mut self.notes, can_save);
                    form_panel.render(ui)
                };
                for event in form_events {
                    match event {
                        PlanFormEvent::SaveRequested => self.save_plan(),
                    }
                }

                spaced_separator(ui);

                let history_events = {
                    let mut history_panel =
                        HistoryPanel::new(&self.data_state.saved_dates, self.selected_log_date);
                    history_panel.render(ui)
                };
                for event in history_events {
                    match event {
                        HistoryEvent::DateSelected(date) => self.select_log_date(date),
                    }
                }
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.add_space(10.0);

                // A failed fetch leaves nothing to plan against; show only the
                // error for this session.
                let (Some(reference), Some(levels)) =
                    (self.data_state.reference, self.data_state.levels)
                else {
                    self.render_fetch_failure(ui);
                    return;
                };

                ScrollArea::vertical().show(ui, |ui| {
                    section_heading(ui, UI_TEXT.reference_heading);
                    ui.label(format!(
                        "{}  |  {} {}  {} {}  {} {}",
                        time_utils::format_date(reference.date),
                        UI_TEXT.label_high,
                        format_level(reference.high),
                        UI_TEXT.label_low,
                        format_level(reference.low),
                        UI_TEXT.label_close,
                        format_level(reference.close),
                    ));

                    section_heading(ui, UI_TEXT.bias_heading);
                    let (color, message) = bias_banner(levels.bias());
                    ui.label(RichText::new(message).strong().color(color));

                    section_heading(ui, UI_TEXT.levels_heading);
                    Grid::new("levels_grid")
                        .striped(true)
                        .num_columns(2)
                        .show(ui, |ui| {
                            for (label, value) in levels.rows() {
                                ui.label(label);
                                ui.monospace(format_level(value));
                                ui.end_row();
                            }
                            ui.label(UI_TEXT.label_ub_width);
                            ui.monospace(format_pct(levels.ub_pct));
                            ui.end_row();
                            ui.label(UI_TEXT.label_lb_width);
                            ui.monospace(format_pct(levels.lb_pct));
                            ui.end_row();
                        });

                    if let Some(snapshot) = &self.data_state.snapshot {
                        section_heading(ui, UI_TEXT.chart_heading);
                        self.plot_view.show_levels_plot(
                            ui,
                            &snapshot.bars,
                            &reference,
                            &levels,
                        );
                    }

                    self.render_loaded_plan(ui);
                });
            });
    }

    /// Read-only viewer: dumps the stored record verbatim as pretty JSON.
    fn render_loaded_plan(&self, ui: &mut eframe::egui::Ui) {
        let Some(plan) = &self.loaded_plan else {
            return;
        };

        let heading = format!(
            "{} {}",
            UI_TEXT.viewer_heading_prefix,
            time_utils::format_date(plan.date)
        );
        section_heading(ui, heading);

        match serde_json::to_string_pretty(plan) {
            Ok(dump) => {
                ui.monospace(dump);
            }
            Err(e) => {
                ui.label(
                    RichText::new(format!("Failed to render record: {}", e))
                        .color(UI_CONFIG.colors.status_error),
                );
            }
        }
    }

    fn render_fetch_failure(&self, ui: &mut eframe::egui::Ui) {
        section_heading(ui, UI_TEXT.fetch_failed_heading);
        if let Some(error) = &self.data_state.last_error {
            ui.label(
                RichText::new(error.to_string())
                    .strong()
                    .color(UI_CONFIG.colors.status_error),
            );
        }
        ui.add_space(5.0);
        ui.label(RichText::new(UI_TEXT.fetch_failed_hint).color(Color32::GRAY));
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(snapshot) = &self.data_state.snapshot {
                    ui.label(format!(
                        "{} {}",
                        UI_TEXT.status_symbol_prefix, snapshot.symbol
                    ));
                    ui.separator();
                    ui.label(format!(
                        "{} {}",
                        snapshot.bars.len(),
                        UI_TEXT.status_bars_suffix
                    ));
                }
                if let Some(signature) = self.data_state.snapshot_signature {
                    ui.separator();
                    ui.label(format!("{} {}", UI_TEXT.status_source_prefix, signature));
                }

                if let Some(note) = &self.status_note {
                    ui.separator();
                    ui.label(RichText::new(note.as_str()).color(UI_CONFIG.colors.status_ok));
                } else if let Some(error) = &self.data_state.last_error {
                    ui.separator();
                    ui.label(
                        RichText::new(error.to_string()).color(UI_CONFIG.colors.status_error),
                    );
                }
            });
        });
    }
}

fn bias_banner(bias: CprBias) -> (Color32, &'static str) {
    match bias {
        CprBias::NarrowTrendLikely => (UI_CONFIG.colors.bias_narrow, UI_TEXT.bias_narrow),
        CprBias::WideRangeBound => (UI_CONFIG.colors.bias_wide, UI_TEXT.bias_wide),
        CprBias::Balanced => (UI_CONFIG.colors.bias_balanced, UI_TEXT.bias_balanced),
    }
}
