// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.formula1.com";
pub const STANDINGS_PATH_TMPL: &str = "/en/results/{season}/drivers";
pub const USER_AGENT: &str = concat!("f1_live/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const HTTP_RETRIES: u32 = 2;
pub const REQUEST_PAUSE_MS: u64 = 250; // first retry pause, doubles

// Season shown when nothing else is configured
pub const DEFAULT_SEASON: u32 = 2024;

// Local store
pub const STORE_DIR: &str = ".store";
pub const SNAPSHOT_SUBDIR: &str = "pages";
pub const LOG_FILE: &str = "debug.log";
pub const DEBUG_ENV: &str = "F1_LIVE_DEBUG";

// Settings
pub const SETTINGS_FILE: &str = "f1_live.cfg";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "projection";
