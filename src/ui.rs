// src/ui.rs

pub mod chat;
pub mod footer;
pub mod header;
pub mod landing;
pub mod quit_confirm;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::{App, AppScreen};

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // Header
                Constraint::Min(1),    // Body
                Constraint::Length(1), // Footer
            ]
            .as_ref(),
        )
        .split(size);

    header::draw_header(f, chunks[0], app);
    landing::draw_landing(f, chunks[1], app);
    footer::draw_footer(f, chunks[2], app);

    if app.chat_open {
        // The chat widget floats over the right side of the body, the
        // way the page embeds it in a corner.
        let overlay = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)].as_ref())
            .split(chunks[1])[1];
        chat::draw_chat(f, overlay, app);
    }

    if app.screen == AppScreen::QuitConfirm {
        quit_confirm::draw_quit_confirm(f, size);
    }
}
