use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::constants::APP_TITLE;
use crate::App;

const ABOUT_TEXT: &str = "HelpBot is an AI-driven customer support platform built for \
instant, accurate and personalized responses. Open the chat widget to talk to the \
support assistant.";

pub fn draw_landing(f: &mut Frame<'_>, area: Rect, app: &App) {
    // When the widget is open it covers the right half; keep the copy in
    // the left half so it stays readable.
    let body = if app.chat_open {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)].as_ref())
            .split(area)[0]
    } else {
        area
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(2), // Hero
                Constraint::Length(4), // About
                Constraint::Min(1),    // Features
            ]
            .as_ref(),
        )
        .split(body);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome to HelpBot",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(hero, chunks[0]);

    let about = Paragraph::new(ABOUT_TEXT)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    f.render_widget(about, chunks[1]);

    let features = [
        ("Instant Feedback", "Get instant feedback to all your queries."),
        ("24/7 Availability", "We are available around the clock."),
        ("Seamless Integration", "Easily integrate with your existing systems."),
    ];
    let feature_lines: Vec<Line> = features
        .iter()
        .map(|(title, description)| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    *title,
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" · "),
                Span::styled(*description, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(feature_lines).wrap(Wrap { trim: true }), chunks[2]);
}
