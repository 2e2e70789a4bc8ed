//! Shared constants

/// UI event poll interval in milliseconds
pub const TICK_RATE_MS: u64 = 50;

/// HTTP client timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Fallback backend base URL when no config file is present
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Directory under the home dir holding the config file
pub const CONFIG_DIR: &str = ".campus-portal";

/// Config file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.json";

/// App name shown in the More screen footer
pub const APP_NAME: &str = "Student Portal";

/// App version shown in the More screen footer
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
