use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::App;

pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let hints = if app.chat_open {
        "Enter send · Esc close chat · PgUp/PgDn scroll · Ctrl+C quit"
    } else {
        "c open chat · q quit"
    };

    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
