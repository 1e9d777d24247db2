// src/lib.rs

pub mod api;
pub mod chat;
pub mod config;
pub mod constants;
pub mod conversation;
pub mod decoder;
pub mod errors;
pub mod key_handlers;
pub mod logs;
pub mod models;
pub mod session;
pub mod status_indicator;
pub mod ui;

use crate::api::ChatClient;
use crate::chat::SendState;
use crate::conversation::Conversation;
use crate::logs::LogBuffer;
use crate::status_indicator::StatusIndicator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Landing,
    QuitConfirm,
    Quit,
}

/// Shared application state. The send task and the draw loop both hold
/// it behind `Arc<tokio::sync::Mutex<..>>`; the conversation field is a
/// snapshot that is swapped whole, never edited in place.
pub struct App {
    pub screen: AppScreen,
    pub chat_open: bool,
    pub conversation: Conversation,
    pub input: String,
    pub send_state: SendState,
    /// Transcript scroll position as an offset from the bottom, in
    /// lines. 0 keeps the view pinned to the newest message.
    pub scroll: u16,
    pub session_user: Option<String>,
    pub logs: LogBuffer,
    pub status: StatusIndicator,
    pub client: ChatClient,
}

impl App {
    pub fn new(client: ChatClient) -> App {
        App {
            screen: AppScreen::Landing,
            chat_open: false,
            conversation: Conversation::new(),
            input: String::new(),
            send_state: SendState::Idle,
            scroll: 0,
            session_user: session::current_user(),
            logs: LogBuffer::new(),
            status: StatusIndicator::new(),
            client,
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Pins the transcript back to the newest message.
    pub fn autoscroll(&mut self) {
        self.scroll = 0;
    }

    pub fn logout(&mut self) {
        if let Err(e) = session::clear_user() {
            log::error!("logout failed: {}", e);
            self.logs.add(format!("logout failed: {}", e));
            return;
        }
        self.session_user = None;
        self.logs.add("logged out");
    }
}
