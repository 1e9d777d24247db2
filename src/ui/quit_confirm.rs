use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw_quit_confirm(f: &mut Frame<'_>, size: Rect) {
    let width = 34u16.min(size.width);
    let height = 3u16.min(size.height);
    let area = Rect {
        x: size.width.saturating_sub(width) / 2,
        y: size.height.saturating_sub(height) / 2,
        width,
        height,
    };

    f.render_widget(Clear, area);

    let prompt = Paragraph::new("Quit HelpBot? (y/n)")
        .style(
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(prompt, area);
}
