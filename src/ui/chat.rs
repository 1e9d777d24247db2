use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::conversation::Entry;
use crate::App;

pub fn draw_chat(f: &mut Frame<'_>, area: Rect, app: &App) {
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("HelpBot Assistant")
        .style(Style::default().fg(Color::LightYellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)].as_ref())
        .split(inner);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(1),    // Transcript
                Constraint::Length(1), // Status
                Constraint::Length(1), // Input
            ]
            .as_ref(),
        )
        .split(columns[0]);

    draw_transcript(f, chunks[0], app);
    app.status.render(f, chunks[1]);
    draw_input(f, chunks[2], app);
    draw_activity(f, columns[1], app);
}

fn draw_transcript(f: &mut Frame<'_>, area: Rect, app: &App) {
    let wrap_width = (area.width as usize).saturating_sub(2).max(8);

    let entries = app.conversation.entries();
    let mut lines: Vec<Line> = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let (prefix, style) = if entry.is_from_user() {
            ("You: ", Style::default().fg(Color::LightGreen))
        } else {
            ("HelpBot: ", Style::default().fg(Color::LightBlue))
        };

        let text = render_text(entry, idx + 1 == entries.len());
        for (i, wrapped) in wrap(&text, wrap_width).iter().enumerate() {
            let line = if i == 0 {
                Line::from(vec![
                    Span::styled(prefix, style.add_modifier(Modifier::BOLD)),
                    Span::styled(wrapped.to_string(), style),
                ])
            } else {
                Line::from(Span::styled(wrapped.to_string(), style))
            };
            lines.push(line);
        }
        lines.push(Line::from(""));
    }

    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    // `app.scroll` counts lines up from the bottom; 0 is pinned to the
    // newest message.
    let scroll = max_scroll - app.scroll.min(max_scroll);

    let transcript = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(transcript.scroll((scroll, 0)), area);
}

/// A typing cue stands in for an assistant message that has no content
/// yet; otherwise the entry text is shown as-is.
fn render_text(entry: &Entry, is_last: bool) -> String {
    let is_open_placeholder = entry.text().is_empty() && !entry.is_from_user() && is_last;
    if is_open_placeholder {
        "…".to_string()
    } else {
        entry.text().to_string()
    }
}

fn draw_input(f: &mut Frame<'_>, area: Rect, app: &App) {
    let input = Line::from(vec![
        Span::styled("→ ", Style::default().fg(Color::DarkGray)),
        Span::styled(&app.input, Style::default().fg(Color::White)),
    ]);

    let visible_width = area.width.saturating_sub(2);
    let text_width = app.input.width() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(Paragraph::new(input).scroll((0, scroll_offset)), area);

    let cursor_x = area.x + 2 + text_width - scroll_offset;
    f.set_cursor_position((cursor_x, area.y));
}

fn draw_activity(f: &mut Frame<'_>, area: Rect, app: &App) {
    let log_lines: Vec<Line> = app
        .logs
        .entries()
        .map(|entry| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(entry),
            ])
        })
        .collect();

    let total = log_lines.len() as u16;
    let scroll = total.saturating_sub(area.height.saturating_sub(1));

    let logs = Paragraph::new(log_lines)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::LEFT))
        .wrap(Wrap { trim: true });
    f.render_widget(logs.scroll((scroll, 0)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ChatClient;
    use crate::models::Message;
    use crate::App;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn long_transcript_app() -> App {
        let mut app = App::new(ChatClient::with_base_url("http://127.0.0.1:0"));
        for i in 0..40 {
            app.conversation = app
                .conversation
                .append(Message::user(format!("question {}", i)))
                .append(Message::assistant(format!("answer {}", i)));
        }
        app
    }

    fn render_frame(app: &App) -> Buffer {
        let backend = TestBackend::new(48, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_chat(f, f.area(), app)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn scroll_up_moves_a_pinned_transcript() {
        let mut app = long_transcript_app();
        app.autoscroll();
        let pinned = render_frame(&app);

        for _ in 0..5 {
            app.scroll_up();
        }
        let scrolled = render_frame(&app);
        assert_ne!(pinned, scrolled);
    }

    #[test]
    fn scroll_down_returns_to_the_pinned_view() {
        let mut app = long_transcript_app();
        app.autoscroll();
        let pinned = render_frame(&app);

        app.scroll_up();
        app.scroll_up();
        app.scroll_down();
        app.scroll_down();
        assert_eq!(render_frame(&app), pinned);
    }

    #[test]
    fn pinned_view_shows_the_newest_message() {
        let mut app = long_transcript_app();
        app.autoscroll();
        let frame = render_frame(&app);
        let content: String = frame.content().iter().map(|cell| cell.symbol()).collect();
        assert!(content.contains("answer 39"));
        assert!(!content.contains("question 0 "));
    }
}
