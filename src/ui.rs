use ratatui::{prelude::*, widgets::*};

use crate::app::status::StatusState;
use crate::models::MessageKind;

/// Lines for the status indicator pane
pub fn status_lines(state: &StatusState, last_checked: Option<&str>) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = match state {
        StatusState::Checking => vec![Line::from(Span::styled(
            "⟳ Checking connection...",
            Style::default().fg(Color::Yellow),
        ))],
        StatusState::Connected => vec![
            Line::from(Span::styled("API Connection", label)),
            Line::from(Span::styled("● Connected", Style::default().fg(Color::Green).bold())),
        ],
        StatusState::Failed { message } => {
            let mut lines = vec![
                Line::from(Span::styled("Connection Failed", label)),
                Line::from(Span::styled("● Offline", Style::default().fg(Color::Red).bold())),
            ];
            if !message.is_empty() {
                lines.push(Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Line::from(vec![
                Span::styled("[,] ", Style::default().fg(Color::Cyan)),
                Span::raw("Configure URL  "),
                Span::styled("[r] ", Style::default().fg(Color::Cyan)),
                Span::raw("Retry"),
            ]));
            lines
        }
    };

    if let Some(time) = last_checked {
        lines.push(Line::from(Span::styled(format!("Last checked {}", time), label)));
    }
    lines
}

/// Plain text of the status indicator, line by line
pub fn status_text(state: &StatusState) -> String {
    status_lines(state, None)
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Border colour of the status pane
pub fn status_color(state: &StatusState) -> Color {
    match state {
        StatusState::Checking => Color::Yellow,
        StatusState::Connected => Color::Green,
        StatusState::Failed { .. } => Color::Red,
    }
}

/// Notification colour
pub fn message_color(kind: MessageKind) -> Color {
    match kind {
        MessageKind::Info => Color::Cyan,
        MessageKind::Error => Color::Red,
    }
}

/// Renders a single-line text input
pub fn render_input<'a>(content: &'a str, title: &'a str, is_focused: bool) -> Paragraph<'a> {
    let style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// Simple JSON syntax highlighting for pretty-printed text
pub fn highlight_json(text: &str) -> Vec<Line<'static>> {
    text.lines().map(highlight_json_line).collect()
}

fn highlight_json_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        match c {
            '"' => {
                let end = string_end(rest);
                let (token, tail) = rest.split_at(end);
                let is_key = tail.trim_start().starts_with(':');
                let color = if is_key { Color::Cyan } else { Color::Green };
                spans.push(Span::styled(token.to_string(), Style::default().fg(color)));
                rest = tail;
            }
            '{' | '}' | '[' | ']' => {
                spans.push(Span::styled(c.to_string(), Style::default().fg(Color::Yellow)));
                rest = &rest[1..];
            }
            _ => {
                let end = rest.find(['"', '{', '}', '[', ']']).unwrap_or(rest.len());
                let (token, tail) = rest.split_at(end);
                spans.extend(highlight_scalars(token));
                rest = tail;
            }
        }
    }

    Line::from(spans)
}

/// Byte length of the quoted string at the start of `s`, including quotes
fn string_end(s: &str) -> usize {
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        match c {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => return i + 1,
            _ => escaped = false,
        }
    }
    s.len()
}

fn highlight_scalars(token: &str) -> Vec<Span<'static>> {
    let trimmed = token
        .trim()
        .trim_start_matches(':')
        .trim_end_matches(',')
        .trim();
    let color = match trimmed {
        "true" | "false" | "null" => Some(Color::Magenta),
        t if !t.is_empty() && t.parse::<f64>().is_ok() => Some(Color::Yellow),
        _ => None,
    };

    match color {
        Some(color) => {
            let start = token.find(trimmed).unwrap_or(0);
            let end = start + trimmed.len();
            vec![
                Span::raw(token[..start].to_string()),
                Span::styled(trimmed.to_string(), Style::default().fg(color)),
                Span::raw(token[end..].to_string()),
            ]
        }
        None => vec![Span::raw(token.to_string())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_of(line: &Line) -> Vec<(String, Option<Color>)> {
        line.spans
            .iter()
            .filter(|s| !s.content.is_empty())
            .map(|s| (s.content.to_string(), s.style.fg))
            .collect()
    }

    #[test]
    fn test_highlight_key_and_values() {
        let lines = highlight_json("  \"success\": true,\n  \"error\": \"a \\\"b\\\"\"");
        let first = spans_of(&lines[0]);
        assert!(first.contains(&("\"success\"".to_string(), Some(Color::Cyan))));
        assert!(first.contains(&("true".to_string(), Some(Color::Magenta))));

        let second = spans_of(&lines[1]);
        assert!(second.contains(&("\"a \\\"b\\\"\"".to_string(), Some(Color::Green))));
    }

    #[test]
    fn test_highlight_preserves_text() {
        let text = "{\n  \"temp\": -2.5,\n  \"tags\": [\"a\", \"b\"]\n}";
        let rebuilt: Vec<String> = highlight_json(text)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(rebuilt.join("\n"), text);
    }

    #[test]
    fn test_failed_status_shows_message() {
        let text = status_text(&StatusState::Failed { message: "offline".into() });
        assert!(text.contains("Connection Failed"));
        assert!(text.contains("Offline"));
        assert!(text.contains("offline"));
    }

    #[test]
    fn test_checking_placeholder() {
        assert!(status_text(&StatusState::Checking).contains("Checking connection"));
    }
}
