//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` by default
//! so debug builds stay readable.

/// Emit UI interaction logs (e.g., saving a plan, picking a stored date).
pub const PRINT_UI_INTERACTIONS: bool = true;

/// Emit market-data fetch progress (provider chain, bar counts).
pub const PRINT_FETCH_EVENTS: bool = true;

/// Emit plan-store read/write/list events.
pub const PRINT_STORE_EVENTS: bool = false;

/// Emit detailed snapshot cache serialization/deserialization logs.
pub const PRINT_SERDE: bool = false;

/// Emit details of UI state serialization/deserialization logs.
pub const PRINT_STATE_SERDE: bool = false;
