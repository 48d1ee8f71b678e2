//! App actor - message loop processing UI events, network responses and config changes

use std::time::{Duration, Instant};

use tokio::sync::{mpsc, watch};

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            network_tx,
            render_tx,
        }
    }

    fn send(&self, cmd: Option<NetworkCommand>) {
        if let Some(cmd) = cmd {
            let _ = self.network_tx.send(cmd);
        }
    }

    fn render(&self) {
        let _ = self.render_tx.send(self.state.to_render_state());
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        let mut config_rx: watch::Receiver<String> = self.state.config.subscribe();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        // Dashboard is ready: run the initial status check
        let initial = self.state.request_status_check();
        self.send(initial);
        self.render();

        loop {
            tokio::select! {
                event = ui_rx.recv() => {
                    // A closed UI channel means the UI loop is gone
                    let quit = event.map_or(true, |event| self.handle_ui_event(event));
                    if quit {
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    self.render();
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    self.render();
                }
                Ok(()) = config_rx.changed() => {
                    let url = config_rx.borrow_and_update().clone();
                    let cmd = self.state.config_changed(&url);
                    self.send(cmd);
                    self.render();
                }
                _ = tick.tick() => {
                    if self.state.tick(Instant::now()) {
                        self.render();
                    }
                }
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Dashboard
            UiEvent::CheckStatus => {
                let cmd = self.state.request_status_check();
                self.send(cmd);
            }
            UiEvent::ScrollUp => self.state.scroll_up(),
            UiEvent::ScrollDown => self.state.scroll_down(),

            // Settings
            UiEvent::OpenSettings => self.state.open_settings(),
            UiEvent::SettingsChar(c) => self.state.settings_edit(|d| d.insert(c)),
            UiEvent::SettingsBackspace => self.state.settings_edit(|d| d.backspace()),
            UiEvent::SettingsCursorLeft => self.state.settings_edit(|d| d.left()),
            UiEvent::SettingsCursorRight => self.state.settings_edit(|d| d.right()),
            UiEvent::SettingsHome => self.state.settings_edit(|d| d.home()),
            UiEvent::SettingsEnd => self.state.settings_edit(|d| d.end()),
            UiEvent::SettingsClear => self.state.settings_edit(|d| d.clear()),
            UiEvent::SaveSettings => self.state.save_settings(),
            UiEvent::CancelSettings => self.state.cancel_settings(),

            // Console
            UiEvent::OpenConsole => self.state.open_console(),
            UiEvent::ConsoleChar(c) => self.state.console_char(c),
            UiEvent::ConsoleBackspace => self.state.console_backspace(),
            UiEvent::SubmitConsole => {
                let cmd = self.state.submit_console();
                self.send(cmd);
            }
            UiEvent::CancelConsole => self.state.cancel_console(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
