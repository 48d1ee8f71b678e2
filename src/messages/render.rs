//! Render state - data structure sent from App layer to UI for rendering

use crate::app::settings::SettingsDialog;
use crate::app::status::StatusState;
use crate::constants::DEFAULT_API_URL;
use crate::messages::ui_events::Overlay;
use crate::models::MessageKind;

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub api_url: String,

    // Status indicator; None when the view has no indicator
    pub status: Option<StatusState>,
    pub last_checked: Option<String>,

    // Request console
    pub console_input: String,
    pub console_loading: bool,
    pub output_title: String,
    pub output: String,
    pub output_scroll: u16,

    // Overlays
    pub overlay: Overlay,
    pub settings: Option<SettingsDialog>,
    pub notification: Option<(String, MessageKind)>,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            api_url: String::from(DEFAULT_API_URL),
            status: None,
            last_checked: None,
            console_input: String::new(),
            console_loading: false,
            output_title: String::from(" Response "),
            output: String::new(),
            output_scroll: 0,
            overlay: Overlay::None,
            settings: None,
            notification: None,
        }
    }
}
