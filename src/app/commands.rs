//! Command handlers - business logic for processing UI events and network responses

use std::time::Instant;

use crate::app::console::save_download;
use crate::app::settings::SettingsDialog;
use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::ApiResponse;

impl AppState {
    // ========================
    // Status check
    // ========================

    /// Start a status check. Does nothing without an indicator.
    pub fn request_status_check(&mut self) -> Option<NetworkCommand> {
        self.indicator.as_ref()?;
        let id = self.next_id();
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.begin(id);
        }
        Some(NetworkCommand::CheckStatus { id })
    }

    /// The backend URL changed; re-check against the new one
    pub fn config_changed(&mut self, url: &str) -> Option<NetworkCommand> {
        tracing::info!(url, "Backend URL changed, re-checking status");
        self.api_url = url.to_string();
        self.console.output.clear();
        self.console.last_endpoint = None;
        self.request_status_check()
    }

    // ========================
    // Settings dialog
    // ========================

    pub fn open_settings(&mut self) {
        if self.settings.is_none() {
            self.settings = Some(SettingsDialog::new(&self.api_url));
        }
    }

    pub fn cancel_settings(&mut self) {
        self.settings = None;
    }

    pub fn save_settings(&mut self) {
        let Some(dialog) = self.settings.take() else {
            return;
        };

        match self.config.set_api_url(Some(&dialog.input)) {
            Ok(true) => self.notifier.info(format!("Backend URL set to {}", self.config.get_api_url())),
            Ok(false) => {}
            Err(e) => {
                tracing::error!(error = %e, "Could not save settings");
                self.notifier.error(format!("Could not save settings: {}", e));
            }
        }
    }

    pub fn settings_edit(&mut self, edit: impl FnOnce(&mut SettingsDialog)) {
        if let Some(dialog) = self.settings.as_mut() {
            edit(dialog);
        }
    }

    // ========================
    // Request console
    // ========================

    pub fn open_console(&mut self) {
        self.console.open();
    }

    pub fn cancel_console(&mut self) {
        self.console.cancel();
    }

    pub fn console_char(&mut self, c: char) {
        self.console.input.push(c);
    }

    pub fn console_backspace(&mut self) {
        self.console.input.pop();
    }

    pub fn submit_console(&mut self) -> Option<NetworkCommand> {
        let endpoint = self.console.take_endpoint()?;
        let id = self.next_id();
        self.console.pending = Some(id);
        Some(NetworkCommand::Fetch { id, endpoint })
    }

    pub fn scroll_up(&mut self) {
        self.console.scroll = self.console.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.console.scroll = self.console.scroll.saturating_add(1);
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Network responses
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::Status { id, result } => {
                if let Some(indicator) = self.indicator.as_mut() {
                    indicator.finish(id, result);
                }
            }
            NetworkResponse::Fetched { id, endpoint, result } => {
                if self.console.pending != Some(id) {
                    return;
                }
                self.console.pending = None;
                match result {
                    Ok(ApiResponse::Json(value)) => self.console.show_json(endpoint, &value),
                    Ok(ApiResponse::Binary(bytes)) => {
                        match save_download(&self.download_dir, &endpoint, &bytes) {
                            Ok(path) => self.notifier.info(format!(
                                "Saved {} bytes to {}",
                                bytes.len(),
                                path.display()
                            )),
                            Err(e) => {
                                tracing::error!(error = %e, endpoint = %endpoint, "Could not save download");
                                self.notifier.error(format!("Could not save download: {}", e));
                            }
                        }
                    }
                    Err(message) => self.notifier.error(message),
                }
            }
        }
    }

    /// Periodic housekeeping. Returns true if a re-render is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notifier.expire(now)
    }
}
