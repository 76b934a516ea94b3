//! Compile-time settings for the board.

/// Local storage key holding the serialized board.
pub const STORAGE_KEY: &str = "kanban-projects";

/// Where an unreadable stored board is kept before the seed board replaces it.
pub const BACKUP_STORAGE_KEY: &str = "kanban-projects-backup";

/// Version tag written into the stored envelope.
pub const SCHEMA_VERSION: u32 = 1;

/// Days until a newly created project is due.
pub const DEFAULT_DUE_IN_DAYS: i64 = 7;

/// Display timezone for created/updated stamps (Asia/Kolkata, no DST).
pub const DISPLAY_UTC_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

pub const CURRENCY_SYMBOL: &str = "₹";

/// How long a card ignores clicks after a drag ends.
pub const DRAG_CLICK_SUPPRESS_MS: u32 = 100;
