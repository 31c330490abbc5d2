use std::fmt;

use chrono::NaiveDate;
use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};

use crate::data::{MarketSnapshot, PlanStore};
use crate::domain::ReferenceBar;
use crate::models::{Checklist, DailyPlan, PivotLevels};
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::time_utils;

#[cfg(debug_assertions)]
use crate::config::debug::{PRINT_STATE_SERDE, PRINT_UI_INTERACTIONS};

/// Error types for application operations
#[derive(Debug, Clone)]
pub enum AppError {
    /// The market-data fetch failed; no levels can be computed this session
    Fetch(String),
    /// A plan store read or write failed
    Storage(String),
    /// No market data is available for the operation
    DataNotAvailable,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Fetch(msg) => write!(f, "Market data fetch failed: {}", msg),
            AppError::Storage(msg) => write!(f, "Plan storage failed: {}", msg),
            AppError::DataNotAvailable => write!(f, "No market data available"),
        }
    }
}

impl std::error::Error for AppError {}

/// Runtime market and store state. Rebuilt each session, never persisted with
/// the UI state.
pub struct DataState {
    pub snapshot: Option<MarketSnapshot>,
    pub reference: Option<ReferenceBar>,
    pub levels: Option<PivotLevels>,
    pub snapshot_signature: Option<&'static str>,
    pub store: PlanStore,
    pub saved_dates: Vec<NaiveDate>,
    pub last_error: Option<AppError>,
}

impl Default for DataState {
    fn default() -> Self {
        Self {
            snapshot: None,
            reference: None,
            levels: None,
            snapshot_signature: None,
            store: PlanStore::default(),
            saved_dates: Vec::new(),
            last_error: None,
        }
    }
}

#[derive(Deserialize, Serialize)]
pub struct PivotPlannerApp {
    // UI state: the draft plan survives restarts
    #[serde(default)]
    pub(super) checklist: Checklist,
    #[serde(default)]
    pub(super) notes: String,

    // Data state - skip serialization since it contains runtime-only data
    #[serde(skip)]
    pub(super) data_state: DataState,
    #[serde(skip)]
    pub(super) plot_view: PlotView,

    // History browser state
    #[serde(skip)]
    pub(super) selected_log_date: Option<NaiveDate>,
    #[serde(skip)]
    pub(super) loaded_plan: Option<DailyPlan>,

    // Transient outcome line for the status bar
    #[serde(skip)]
    pub(super) status_note: Option<String>,
}

impl PivotPlannerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        snapshot: anyhow::Result<(MarketSnapshot, &'static str)>,
    ) -> Self {
        let mut app: PivotPlannerApp;

        // Attempt to load the persisted draft state
        if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                #[cfg(debug_assertions)]
                if PRINT_STATE_SERDE {
                    log::info!("Successfully loaded persisted state");
                }
                app = value;
            } else {
                #[cfg(debug_assertions)]
                if PRINT_STATE_SERDE {
                    log::info!("Failed to get app state from storage. Creating anew.");
                }
                app = PivotPlannerApp::new_with_initial_state();
            }
        } else {
            app = PivotPlannerApp::new_with_initial_state();
        }

        app.data_state = DataState::default();
        app.plot_view = PlotView::new();

        match snapshot {
            Ok((snapshot, signature)) => app.install_snapshot(snapshot, signature),
            Err(e) => {
                log::error!("Market data fetch failed: {:#}", e);
                app.data_state.last_error = Some(AppError::Fetch(format!("{:#}", e)));
            }
        }

        app.refresh_saved_dates();
        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            checklist: Checklist::default(),
            notes: String::new(),
            data_state: DataState::default(),
            plot_view: PlotView::default(),
            selected_log_date: None,
            loaded_plan: None,
            status_note: None,
        }
    }

    /// Derive the reference bar and level set from a fresh snapshot. A
    /// snapshot too short to contain a previous session is a fetch failure.
    fn install_snapshot(&mut self, snapshot: MarketSnapshot, signature: &'static str) {
        match snapshot.reference_bar() {
            Ok(reference) => {
                self.data_state.levels = Some(PivotLevels::from_reference(&reference));
                self.data_state.reference = Some(reference);
                self.data_state.snapshot = Some(snapshot);
                self.data_state.snapshot_signature = Some(signature);
            }
            Err(e) => {
                log::error!("Snapshot unusable: {:#}", e);
                self.data_state.last_error = Some(AppError::Fetch(format!("{:#}", e)));
            }
        }
    }

    pub(super) fn refresh_saved_dates(&mut self) {
        match self.data_state.store.list_dates() {
            Ok(dates) => self.data_state.saved_dates = dates,
            Err(e) => {
                log::error!("Failed to list stored plans: {:#}", e);
                self.data_state.last_error = Some(AppError::Storage(format!("{:#}", e)));
            }
        }
    }

    /// Combine today's date, the computed levels and the form contents into
    /// one record and hand it to the store. Overwrites any earlier save for
    /// the same date.
    pub(super) fn save_plan(&mut self) {
        let Some(levels) = self.data_state.levels else {
            self.data_state.last_error = Some(AppError::DataNotAvailable);
            return;
        };

        let plan = DailyPlan {
            date: time_utils::today_local(),
            pivots: levels,
            checklist: self.checklist,
            notes: self.notes.clone(),
        };

        match self.data_state.store.save(&plan) {
            Ok(()) => {
                #[cfg(debug_assertions)]
                if PRINT_UI_INTERACTIONS {
                    log::info!("Plan saved for {}", plan.date);
                }
                self.status_note = Some(format!(
                    "{} {}",
                    crate::ui::config::UI_TEXT.saved_prefix,
                    time_utils::format_date(plan.date)
                ));
                // The saved date must show up in the browser immediately
                self.refresh_saved_dates();
                if self.selected_log_date == Some(plan.date) {
                    self.loaded_plan = Some(plan);
                }
            }
            Err(e) => {
                log::error!("Plan save failed: {:#}", e);
                self.status_note = Some(format!("Save failed: {:#}", e));
                self.data_state.last_error = Some(AppError::Storage(format!("{:#}", e)));
            }
        }
    }

    pub(super) fn select_log_date(&mut self, date: NaiveDate) {
        match self.data_state.store.load(date) {
            Ok(plan) => {
                self.selected_log_date = Some(date);
                self.loaded_plan = Some(plan);
            }
            Err(e) => {
                log::error!("Failed to load plan for {}: {:#}", date, e);
                self.status_note = Some(format!("Load failed: {:#}", e));
                self.data_state.last_error = Some(AppError::Storage(format!("{:#}", e)));
            }
        }
    }
}

impl eframe::App for PivotPlannerApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}
