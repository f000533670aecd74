// src/config/consts.rs

// Data source
pub const DEFAULT_SOURCE: &str = "data.json";

// Net config
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("dmm_dashboard/", env!("CARGO_PKG_VERSION"));

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";
pub const THEME_FILE: &str = "theme";

// Filters
pub const ALL_LABEL: &str = "All";

// Window
pub const WINDOW_W: u32 = 1100;
pub const WINDOW_H: u32 = 720;
