//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Dashboard
    CheckStatus,
    ScrollUp,
    ScrollDown,

    // Settings dialog
    OpenSettings,
    SettingsChar(char),
    SettingsBackspace,
    SettingsCursorLeft,
    SettingsCursorRight,
    SettingsHome,
    SettingsEnd,
    SettingsClear,
    SaveSettings,
    CancelSettings,

    // Request console
    OpenConsole,
    ConsoleChar(char),
    ConsoleBackspace,
    SubmitConsole,
    CancelConsole,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Which overlay currently owns the keyboard
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Overlay {
    #[default]
    None,
    Help,
    Settings,
    Console,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, overlay: Overlay) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            KeyCode::Char('u') if overlay == Overlay::Settings => return Some(UiEvent::SettingsClear),
            _ => {}
        }
    }

    match overlay {
        Overlay::Help => Some(UiEvent::CloseHelp),
        Overlay::Settings => match key.code {
            KeyCode::Esc => Some(UiEvent::CancelSettings),
            KeyCode::Enter => Some(UiEvent::SaveSettings),
            KeyCode::Backspace => Some(UiEvent::SettingsBackspace),
            KeyCode::Left => Some(UiEvent::SettingsCursorLeft),
            KeyCode::Right => Some(UiEvent::SettingsCursorRight),
            KeyCode::Home => Some(UiEvent::SettingsHome),
            KeyCode::End => Some(UiEvent::SettingsEnd),
            KeyCode::Char(c) => Some(UiEvent::SettingsChar(c)),
            _ => None,
        },
        Overlay::Console => match key.code {
            KeyCode::Esc => Some(UiEvent::CancelConsole),
            KeyCode::Enter => Some(UiEvent::SubmitConsole),
            KeyCode::Backspace => Some(UiEvent::ConsoleBackspace),
            KeyCode::Char(c) => Some(UiEvent::ConsoleChar(c)),
            _ => None,
        },
        Overlay::None => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('r') => Some(UiEvent::CheckStatus),
            KeyCode::Char(',') | KeyCode::Char('s') => Some(UiEvent::OpenSettings),
            KeyCode::Char('g') => Some(UiEvent::OpenConsole),
            KeyCode::Up => Some(UiEvent::ScrollUp),
            KeyCode::Down => Some(UiEvent::ScrollDown),
            _ => None,
        },
    }
}
