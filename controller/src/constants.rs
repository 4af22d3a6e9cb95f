//! Crate-wide constants for the demo flow.

/// Age threshold sent with every verification request unless configured otherwise.
pub const DEFAULT_MIN_AGE: u8 = 18;

/// Number of leading characters shown when displaying credential ids and Merkle roots.
pub const ID_PREVIEW_LEN: usize = 16;

/// Number of steps in the progress indicator.
pub const NUM_STEPS: usize = 3;

/// Multipart field name the backend reads the passport file from.
pub const PASSPORT_FIELD: &str = "file";
