// src/logs.rs

use crate::constants::LOG_PANEL_CAPACITY;
use chrono::Local;
use std::collections::VecDeque;

/// Bounded buffer of activity one-liners shown next to the chat widget.
#[derive(Debug, Default)]
pub struct LogBuffer {
    entries: VecDeque<String>,
}

impl LogBuffer {
    pub fn new() -> Self {
        LogBuffer::default()
    }

    pub fn add(&mut self, message: impl Into<String>) {
        let line = format!("{} {}", Local::now().format("%H:%M:%S"), message.into());
        self.entries.push_back(line);
        while self.entries.len() > LOG_PANEL_CAPACITY {
            self.entries.pop_front();
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
