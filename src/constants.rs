// Session constants
pub const STARTING_BUDGET: f64 = 50_000.0;

// Pricing constants
pub const MIN_MARKUP_RATE: f64 = 0.1;

// UI timing constants
pub const POLL_INTERVAL_MS: u64 = 50;
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;
