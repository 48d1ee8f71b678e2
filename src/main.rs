//! ASBOT Console - terminal dashboard for an ASBOT backend
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use asbot_console::app::{AppActor, AppState};
use asbot_console::config::ConfigStore;
use asbot_console::constants::{APP_NAME, APP_VERSION, LOG_FILE};
use asbot_console::messages::ui_events::{key_to_ui_event, Overlay};
use asbot_console::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use asbot_console::network::{ApiClient, NetworkActor};
use asbot_console::ui::{highlight_json, message_color, render_input, status_color, status_lines};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config = Arc::new(ConfigStore::new());
    tracing::info!(url = %config.get_api_url(), dir = %config.config_dir().display(), "Starting {}", APP_NAME);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(ApiClient::new(config.clone()), net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(AppState::new(config), net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.overlay) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(8), // Status indicator
            Constraint::Min(3),    // Response
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    draw_title_bar(f, state, chunks[0]);
    draw_status(f, state, chunks[1]);
    draw_output(f, state, chunks[2]);
    draw_key_bar(f, state, chunks[3]);

    match state.overlay {
        Overlay::Help => draw_help_popup(f, area),
        Overlay::Settings => draw_settings_popup(f, state, area),
        Overlay::Console => draw_console_popup(f, state, area),
        Overlay::None => {}
    }

    if let Some((text, kind)) = &state.notification {
        draw_notification(f, text, *kind, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::styled(format!(" v{} ", APP_VERSION), Style::default().fg(Color::DarkGray)),
        Span::raw(" Backend: "),
        Span::styled(state.api_url.clone(), Style::default().fg(Color::Yellow)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_status(f: &mut Frame, state: &RenderState, area: Rect) {
    let Some(status) = &state.status else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(status_color(status)))
        .title(" Status ");

    let lines = status_lines(status, state.last_checked.as_deref());
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn draw_output(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(state.output_title.clone());

    let lines = if state.output.is_empty() {
        vec![Line::from(Span::styled(
            "Press 'g' to GET an endpoint.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        highlight_json(&state.output)
    };

    let output = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.output_scroll, 0));
    f.render_widget(output, area);
}

fn draw_key_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = match state.overlay {
        Overlay::Settings => " Enter:save | Esc:cancel | Ctrl+U:clear ",
        Overlay::Console => " Enter:send | Esc:cancel ",
        Overlay::Help => " any key:close ",
        Overlay::None if state.console_loading => " Loading... ",
        Overlay::None => " r:re-check | ,:settings | g:GET endpoint | ?:help | q:quit ",
    };

    let bar = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_settings_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let Some(dialog) = &state.settings else {
        return;
    };
    let popup_area = centered_rect(70, 40, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" ⚙ Settings ")
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);

    f.render_widget(Clear, popup_area);
    f.render_widget(block, popup_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    f.render_widget(render_input(&dialog.input, " Backend API URL ", true), rows[0]);

    let hint = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("Use "),
            Span::styled("http://localhost:8000", Style::default().bold()),
            Span::raw(" for local testing."),
        ]),
        Line::from("Use your Pi's IP or Cloudflare URL for remote access."),
        Line::from(""),
        Line::from(Span::styled("Enter: Save   Esc: Cancel", Style::default().fg(Color::Cyan))),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .wrap(Wrap { trim: false });
    f.render_widget(hint, rows[1]);

    let cursor = u16::try_from(dialog.cursor).unwrap_or(u16::MAX);
    f.set_cursor_position(input_cursor(rows[0], cursor));
}

/// Screen position of a text cursor inside a bordered single-line input
fn input_cursor(area: Rect, cursor: u16) -> Position {
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    let cursor_x = area.x.saturating_add(cursor).saturating_add(1).min(max_x);
    Position::new(cursor_x, area.y.saturating_add(1))
}

fn draw_console_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let popup_area = centered_rect(60, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" GET endpoint (Enter to send, Esc to cancel) ")
        .style(Style::default().bg(Color::Black));

    let content = if state.console_input.is_empty() {
        "/status"
    } else {
        state.console_input.as_str()
    };

    f.render_widget(Clear, popup_area);
    f.render_widget(Paragraph::new(content).block(block), popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 ASBOT CONSOLE - Keyboard Shortcuts

 DASHBOARD
   r                  Re-check backend status
   , / s              Open settings (backend URL)
   g                  GET an endpoint
   ↑ / ↓              Scroll response

 SETTINGS
   Enter              Save URL
   Esc                Cancel
   Ctrl+U             Clear field

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, popup_area);
    f.render_widget(Paragraph::new(help_text).block(block), popup_area);
}

fn draw_notification(f: &mut Frame, text: &str, kind: asbot_console::models::MessageKind, area: Rect) {
    let width = (text.chars().count() as u16 + 4).min(area.width).max(20.min(area.width));
    let box_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y + area.height.saturating_sub(4),
        width,
        height: 3.min(area.height),
    };
    let color = message_color(kind);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, box_area);
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(color)).block(block),
        box_area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
