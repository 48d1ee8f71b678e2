//! App state - pure data structure with no terminal I/O

use std::path::PathBuf;
use std::sync::Arc;

use crate::app::console::RequestConsole;
use crate::app::notify::Notifier;
use crate::app::settings::SettingsDialog;
use crate::app::status::StatusIndicator;
use crate::config::ConfigStore;
use crate::messages::ui_events::Overlay;
use crate::messages::RenderState;

/// Main application state
pub struct AppState {
    pub config: Arc<ConfigStore>,
    /// Last known backend URL, refreshed on config changes
    pub api_url: String,

    // Dashboard status indicator; absent views never check status
    pub indicator: Option<StatusIndicator>,

    // Overlays
    pub settings: Option<SettingsDialog>,
    pub show_help: bool,

    pub notifier: Notifier,
    pub console: RequestConsole,
    pub download_dir: PathBuf,

    pub next_request_id: u64,
}

impl AppState {
    /// Dashboard view, with a status indicator
    pub fn new(config: Arc<ConfigStore>) -> Self {
        let mut state = Self::without_indicator(config);
        state.indicator = Some(StatusIndicator::new());
        state
    }

    /// A view without a status indicator; status checks are inert
    pub fn without_indicator(config: Arc<ConfigStore>) -> Self {
        let download_dir = dirs::download_dir().unwrap_or_else(|| config.config_dir().to_path_buf());
        AppState {
            api_url: config.get_api_url(),
            config,
            indicator: None,
            settings: None,
            show_help: false,
            notifier: Notifier::new(),
            console: RequestConsole::default(),
            download_dir,
            next_request_id: 1,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Overlay currently owning the keyboard
    pub fn overlay(&self) -> Overlay {
        if self.show_help {
            Overlay::Help
        } else if self.settings.is_some() {
            Overlay::Settings
        } else if self.console.prompt_open {
            Overlay::Console
        } else {
            Overlay::None
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let output_title = match (&self.console.last_endpoint, self.console.pending) {
            (_, Some(_)) => " Response [...] ".to_string(),
            (Some(endpoint), None) => format!(" GET {} ", endpoint),
            (None, None) => " Response ".to_string(),
        };

        RenderState {
            api_url: self.api_url.clone(),
            status: self.indicator.as_ref().map(|i| i.state.clone()),
            last_checked: self
                .indicator
                .as_ref()
                .and_then(|i| i.last_checked)
                .map(|t| t.format("%H:%M:%S").to_string()),
            console_input: self.console.input.clone(),
            console_loading: self.console.pending.is_some(),
            output_title,
            output: self.console.output.clone(),
            output_scroll: self.console.scroll,
            overlay: self.overlay(),
            settings: self.settings.clone(),
            notification: self
                .notifier
                .current()
                .map(|n| (n.text.clone(), n.kind)),
        }
    }
}
