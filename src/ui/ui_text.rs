/// Every user-facing string in one place so panels stay free of literals.
pub struct UiText {
    // --- Window / status bar ---
    pub app_title: &'static str,
    pub status_symbol_prefix: &'static str,
    pub status_bars_suffix: &'static str,
    pub status_source_prefix: &'static str,

    // --- Central panel ---
    pub reference_heading: &'static str,
    pub levels_heading: &'static str,
    pub bias_heading: &'static str,
    pub chart_heading: &'static str,
    pub viewer_heading_prefix: &'static str,
    pub fetch_failed_heading: &'static str,
    pub fetch_failed_hint: &'static str,
    pub label_high: &'static str,
    pub label_low: &'static str,
    pub label_close: &'static str,
    pub label_ub_width: &'static str,
    pub label_lb_width: &'static str,
    pub bias_narrow: &'static str,
    pub bias_wide: &'static str,
    pub bias_balanced: &'static str,

    // --- Plan form ---
    pub checklist_heading: &'static str,
    pub checklist_progress_suffix: &'static str,
    pub notes_heading: &'static str,
    pub notes_hint: &'static str,
    pub save_button: &'static str,
    pub save_needs_data: &'static str,
    pub saved_prefix: &'static str,

    // --- History browser ---
    pub history_heading: &'static str,
    pub history_empty: &'static str,

    // --- Plot labels ---
    pub plot_x_axis: &'static str,
    pub plot_candles_label: &'static str,
    pub plot_cpr_label: &'static str,
    pub label_prev_high: &'static str,
    pub label_prev_low: &'static str,
    pub label_prev_close: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Pivot Planner - Mark. Check. Trade.",
    status_symbol_prefix: "Symbol:",
    status_bars_suffix: "daily bars",
    status_source_prefix: "Source:",

    reference_heading: "Reference Session",
    levels_heading: "Pivot & CPR Levels",
    bias_heading: "CPR Bias",
    chart_heading: "Candles with CPR & Pivot Overlay",
    viewer_heading_prefix: "Saved Plan",
    fetch_failed_heading: "Market data unavailable",
    fetch_failed_hint: "Levels cannot be computed without a reference session. Restart to retry the fetch.",
    label_high: "High",
    label_low: "Low",
    label_close: "Close",
    label_ub_width: "% from CP to UB",
    label_lb_width: "% from CP to LB",
    bias_narrow: "Narrow CPR - trend day likely",
    bias_wide: "Wide CPR - range-bound day possible",
    bias_balanced: "Moderate CPR - balanced movement",

    checklist_heading: "Pre-Market Checklist",
    checklist_progress_suffix: "checks done",
    notes_heading: "Trade Notes",
    notes_hint: "Write your intraday trade notes here...",
    save_button: "Save Today's Plan",
    save_needs_data: "Saving needs computed levels",
    saved_prefix: "Plan saved for",

    history_heading: "Previous Plans",
    history_empty: "No plans saved yet.",

    plot_x_axis: "Session",
    plot_candles_label: "Daily bars",
    plot_cpr_label: "CPR",
    label_prev_high: "Prev High",
    label_prev_low: "Prev Low",
    label_prev_close: "Prev Close",
};
