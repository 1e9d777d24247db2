// API constants
pub const CHAT_ENDPOINT_PATH: &str = "/api/chat";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

// Conversation constants
pub const GREETING_TEXT: &str =
    "Hi! I'm the HelpBot support assistant. How can I help you today?";
pub const FALLBACK_REPLY: &str =
    "I'm sorry, but I encountered an error. Please try again later.";

// UI constants
pub const APP_TITLE: &str = "HelpBot - Your personalized AI assistant";
pub const LOG_PANEL_CAPACITY: usize = 200;
