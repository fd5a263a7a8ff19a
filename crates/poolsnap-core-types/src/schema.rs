//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Snapshot identifiers
pub const FIELD_PATH: &str = "path";
pub const FIELD_LABEL_A: &str = "label_a";
pub const FIELD_LABEL_B: &str = "label_b";

// Collection sizes
pub const FIELD_POOL_COUNT: &str = "pool_count";
pub const FIELD_SNAPSHOT_COUNT: &str = "snapshot_count";
pub const FIELD_RESULT_POOLS: &str = "result_pools";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
