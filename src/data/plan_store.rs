//! Flat-file store for daily plan records: one JSON file per calendar date.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use itertools::Itertools;

use crate::config::{PLAN_LOG_DIR, PLAN_LOG_EXT, plan_log_filename};
use crate::models::DailyPlan;
use crate::utils::time_utils;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_STORE_EVENTS;

/// File-per-date store. The record's date is the natural key; saving twice
/// for the same date leaves only the second record. No locking: concurrent
/// writers to one date are last-writer-wins.
pub struct PlanStore {
    root: PathBuf,
}

impl Default for PlanStore {
    fn default() -> Self {
        Self::new(PLAN_LOG_DIR)
    }
}

impl PlanStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn record_path(&self, date: NaiveDate) -> PathBuf {
        self.root.join(plan_log_filename(date))
    }

    /// Serialize the record to its per-date file, creating the store
    /// directory if absent. An existing record for the same date is
    /// overwritten. I/O errors propagate to the caller.
    pub fn save(&self, plan: &DailyPlan) -> Result<()> {
        fs::create_dir_all(&self.root)
            .context(format!("Failed to create directory: {}", self.root.display()))?;

        let path = self.record_path(plan.date);
        let file =
            File::create(&path).context(format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, plan)
            .context(format!("Failed to serialize plan to: {}", path.display()))?;

        #[cfg(debug_assertions)]
        if PRINT_STORE_EVENTS {
            log::info!("Saved plan record: {}", path.display());
        }
        Ok(())
    }

    /// Dates with a stored record, most recent first. A missing store
    /// directory just means nothing has been saved yet.
    pub fn list_dates(&self) -> Result<Vec<NaiveDate>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e)
                    .context(format!("Failed to read directory: {}", self.root.display()));
            }
        };

        let dates: Vec<NaiveDate> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| date_from_filename(&entry.path()))
            .sorted()
            .rev()
            .collect();

        #[cfg(debug_assertions)]
        if PRINT_STORE_EVENTS {
            log::info!("Plan store holds {} record(s)", dates.len());
        }
        Ok(dates)
    }

    /// Load the record for a date. A date with no file is a not-found error,
    /// not an I/O fault.
    pub fn load(&self, date: NaiveDate) -> Result<DailyPlan> {
        let path = self.record_path(date);
        if !path.exists() {
            bail!("No plan recorded for {}", time_utils::format_date(date));
        }

        let file = File::open(&path).context(format!("Failed to open file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let plan = serde_json::from_reader(reader)
            .context(format!("Failed to deserialize plan: {}", path.display()))?;
        Ok(plan)
    }
}

/// Parse "YYYY-MM-DD.json" back into a date; foreign files are ignored.
fn date_from_filename(path: &Path) -> Option<NaiveDate> {
    if path.extension().and_then(|ext| ext.to_str()) != Some(PLAN_LOG_EXT) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    time_utils::parse_date(stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Checklist, PivotLevels};

    /// Fresh store under the system temp dir; wiped at the start of each test
    /// so reruns see a clean slate.
    fn temp_store(tag: &str) -> PlanStore {
        let dir = std::env::temp_dir().join(format!("pivot_planner_{}_{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        PlanStore::new(dir)
    }

    fn plan_for(date: NaiveDate, notes: &str) -> DailyPlan {
        DailyPlan {
            date,
            pivots: PivotLevels::from_hlc(18500.0, 18300.0, 18450.0),
            checklist: Checklist {
                bias_made: true,
                ..Checklist::default()
            },
            notes: notes.to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_save_then_load_round_trips_every_field() {
        let store = temp_store("round_trip");
        let plan = plan_for(date(2026, 8, 4), "Short below LB only.");

        store.save(&plan).unwrap();
        let restored = store.load(plan.date).unwrap();
        assert_eq!(restored, plan);
    }

    #[test]
    fn test_list_dates_is_descending() {
        let store = temp_store("ordering");
        for day in [date(2026, 8, 1), date(2026, 8, 3), date(2026, 8, 2)] {
            store.save(&plan_for(day, "")).unwrap();
        }

        let dates = store.list_dates().unwrap();
        assert_eq!(
            dates,
            vec![date(2026, 8, 3), date(2026, 8, 2), date(2026, 8, 1)]
        );
    }

    #[test]
    fn test_missing_store_directory_lists_empty() {
        let store = temp_store("missing_dir");
        assert_eq!(store.list_dates().unwrap(), Vec::<NaiveDate>::new());
    }

    #[test]
    fn test_second_save_for_a_date_wins() {
        let store = temp_store("overwrite");
        let day = date(2026, 8, 4);

        store.save(&plan_for(day, "first draft")).unwrap();
        store.save(&plan_for(day, "final plan")).unwrap();

        assert_eq!(store.list_dates().unwrap(), vec![day]);
        assert_eq!(store.load(day).unwrap().notes, "final plan");
    }

    #[test]
    fn test_foreign_files_are_ignored_by_listing() {
        let store = temp_store("foreign");
        let day = date(2026, 8, 4);
        store.save(&plan_for(day, "")).unwrap();

        fs::write(store.root.join("README.txt"), "not a record").unwrap();
        fs::write(store.root.join("scratch.json"), "{}").unwrap();

        assert_eq!(store.list_dates().unwrap(), vec![day]);
    }

    #[test]
    fn test_load_of_unsaved_date_is_a_not_found_error() {
        let store = temp_store("not_found");
        let err = store.load(date(2026, 8, 4)).unwrap_err();
        assert!(err.to_string().contains("No plan recorded for 2026-08-04"));
    }
}
