// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://fairly-whole-hawk.ngrok-free.app";
pub const SEARCH_PATH: &str = "/search";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// The service sits behind ngrok; without this header it serves an
// interstitial HTML page instead of JSON.
pub const NGROK_SKIP_HEADER: &str = "ngrok-skip-browser-warning";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const RESULTS_FILE: &str = "results.json";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_PREFIX: &str = "data_export";

// UI
pub const TOAST_SECS: u64 = 3;
