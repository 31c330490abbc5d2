use chrono::NaiveDate;
use eframe::egui::{Color32, RichText, ScrollArea, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::models::{Checklist, ChecklistItem};
use crate::ui::config::UI_TEXT;
use crate::ui::utils::colored_subsection_heading;
use crate::utils::time_utils;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_UI_INTERACTIONS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Panel for the daily plan form: checklist, notes, save action
pub struct PlanFormPanel<'a> {
    checklist: &'a mut Checklist,
    notes: &'a mut String,
    can_save: bool,
}

#[derive(Debug)]
pub enum PlanFormEvent {
    SaveRequested,
}

impl<'a> PlanFormPanel<'a> {
    pub fn new(checklist: &'a mut Checklist, notes: &'a mut String, can_save: bool) -> Self {
        Self {
            checklist,
            notes,
            can_save,
        }
    }

    fn render_checklist(&mut self, ui: &mut Ui) {
        ui.label(colored_subsection_heading(UI_TEXT.checklist_heading));
        ui.add_space(5.0);

        for item in ChecklistItem::iter() {
            ui.checkbox(self.checklist.flag_mut(item), item.label());
        }

        let progress = format!(
            "{}/{} {}",
            self.checklist.completed_count(),
            Checklist::total_count(),
            UI_TEXT.checklist_progress_suffix
        );
        ui.label(RichText::new(progress).small().color(Color32::GRAY));
    }

    fn render_notes(&mut self, ui: &mut Ui) {
        ui.add_space(5.0);
        ui.label(colored_subsection_heading(UI_TEXT.notes_heading));
        ui.add(
            TextEdit::multiline(self.notes)
                .hint_text(UI_TEXT.notes_hint)
                .desired_rows(8)
                .desired_width(f32::INFINITY),
        );
    }
}

impl Panel for PlanFormPanel<'_> {
    type Event = PlanFormEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        self.render_checklist(ui);
        self.render_notes(ui);

        ui.add_space(10.0);
        let save = ui.add_enabled(self.can_save, eframe::egui::Button::new(UI_TEXT.save_button));
        if !self.can_save {
            ui.label(
                RichText::new(UI_TEXT.save_needs_data)
                    .small()
                    .color(Color32::GRAY),
            );
        }
        if save.clicked() {
            #[cfg(debug_assertions)]
            if PRINT_UI_INTERACTIONS {
                log::info!("Save requested from the plan form");
            }
            events.push(PlanFormEvent::SaveRequested);
        }

        events
    }
}

/// Panel listing stored plan dates, most recent first
pub struct HistoryPanel<'a> {
    dates: &'a [NaiveDate],
    selected: Option<NaiveDate>,
}

#[derive(Debug)]
pub enum HistoryEvent {
    DateSelected(NaiveDate),
}

impl<'a> HistoryPanel<'a> {
    pub fn new(dates: &'a [NaiveDate], selected: Option<NaiveDate>) -> Self {
        Self { dates, selected }
    }
}

impl Panel for HistoryPanel<'_> {
    type Event = HistoryEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.label(colored_subsection_heading(UI_TEXT.history_heading));
        if self.dates.is_empty() {
            ui.label(
                RichText::new(UI_TEXT.history_empty)
                    .small()
                    .color(Color32::GRAY),
            );
            return events;
        }

        ScrollArea::vertical()
            .max_height(160.)
            .id_salt("history_panel")
            .show(ui, |ui| {
                for date in self.dates {
                    let is_selected = self.selected == Some(*date);
                    let label = time_utils::format_date(*date);
                    if ui.selectable_label(is_selected, label).clicked() {
                        #[cfg(debug_assertions)]
                        if PRINT_UI_INTERACTIONS {
                            log::info!("A stored plan was selected: {}", date);
                        }
                        events.push(HistoryEvent::DateSelected(*date));
                    }
                }
            });

        events
    }
}
