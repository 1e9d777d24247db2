use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::App;

pub fn draw_header(f: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .style(Style::default().fg(Color::LightCyan))
        .borders(Borders::BOTTOM);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(area);

    let title = Paragraph::new("HelpBot")
        .style(
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Left);
    f.render_widget(title, chunks[0]);

    // Show who is logged in, mirroring the page's account corner.
    let account = match &app.session_user {
        Some(user) => format!("{}  [Ctrl+L logout]", user),
        None => "not signed in".to_string(),
    };
    let account = Paragraph::new(account)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    f.render_widget(account, chunks[1]);
}
