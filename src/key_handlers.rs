use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::Mutex;

use crate::{chat, App, AppScreen};

/// Dispatches a key event against the current screen. `app_arc` is the
/// same state the caller has locked as `app`; it is only cloned into
/// spawned send tasks.
pub fn handle_key(app: &mut App, app_arc: &Arc<Mutex<App>>, key: KeyEvent) {
    match app.screen {
        AppScreen::Landing => {
            if app.chat_open {
                handle_chat_input(app, app_arc, key);
            } else {
                handle_landing_input(app, key);
            }
        }
        AppScreen::QuitConfirm => handle_quit_confirm_input(app, key),
        AppScreen::Quit => {}
    }
}

fn handle_landing_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.screen = AppScreen::QuitConfirm;
        }
        KeyCode::Char('c') | KeyCode::Char('t') => {
            app.chat_open = true;
        }
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.session_user.is_some() {
                app.logout();
            }
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.screen = AppScreen::QuitConfirm;
        }
        _ => {}
    }
}

fn handle_chat_input(app: &mut App, app_arc: &Arc<Mutex<App>>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.chat_open = false;
        }
        KeyCode::Enter => {
            // The send task owns gating, draft clearing and the store
            // updates; a task spawned while one is in flight is a no-op.
            let draft = app.input.clone();
            tokio::spawn(chat::send_message(app_arc.clone(), draft));
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.screen = AppScreen::QuitConfirm,
                    'u' => app.scroll_up(),
                    'd' => app.scroll_down(),
                    _ => {}
                }
            } else {
                app.input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_quit_confirm_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.screen = AppScreen::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.screen = AppScreen::Landing;
        }
        _ => {}
    }
}
