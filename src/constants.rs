//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

use std::time::Duration;

/// Backend URL used when nothing has been saved yet
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Storage key holding the backend URL
pub const API_URL_KEY: &str = "asbot_api_url";

/// Directory (under the home directory) holding persisted settings
pub const CONFIG_DIR_NAME: &str = ".asbot";

/// Settings file inside the config directory
pub const SETTINGS_FILE: &str = "settings.yaml";

/// Endpoint queried by the status check
pub const STATUS_ENDPOINT: &str = "/status";

/// How long a notification stays on screen
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Log file written in the working directory
pub const LOG_FILE: &str = "asbot.log";

/// Application name
pub const APP_NAME: &str = "ASBOT Console";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
