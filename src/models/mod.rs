pub mod pivots;
pub mod plan;

// Re-export commonly used types
pub use pivots::{CprBias, PivotLevels};
pub use plan::{Checklist, ChecklistItem, DailyPlan};
