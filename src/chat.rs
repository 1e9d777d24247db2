// src/chat.rs
//
// The stream consumer: drives one request/response cycle end-to-end,
// folding decoded chunks into the conversation as they arrive.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::api::ChatClient;
use crate::constants::FALLBACK_REPLY;
use crate::errors::HelpbotResult;
use crate::models::Message;
use crate::App;

/// Send gate. Exactly one send may be in flight; a call while `Sending`
/// is ignored rather than queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendState {
    Idle,
    Sending,
}

/// Sends `draft` to the backend and streams the reply into the
/// conversation.
///
/// Empty or whitespace-only drafts are ignored without touching the
/// store. On a valid send the user turn and an empty assistant
/// placeholder are appended before any network I/O; the outbound payload
/// is the conversation as it stood before the placeholder (greeting
/// excluded). Every failure path resolves to the fixed apology via
/// `replace_last`, discarding partial text, and the gate reopens on both
/// success and failure.
pub async fn send_message(app: Arc<Mutex<App>>, draft: String) {
    let draft = draft.trim();
    if draft.is_empty() {
        return;
    }

    let (client, payload) = {
        let mut guard = app.lock().await;
        if guard.send_state == SendState::Sending {
            log::debug!("send ignored, another turn is in flight");
            return;
        }
        guard.send_state = SendState::Sending;
        guard.input.clear();
        guard.status.set_sending(true);
        guard.logs.add(format!("sending {} chars", draft.len()));

        let user = Message::user(draft);
        let mut payload = guard.conversation.payload();
        payload.push(user.clone());

        guard.conversation = guard
            .conversation
            .append(user)
            .append(Message::assistant(""));
        guard.autoscroll();

        (guard.client.clone(), payload)
    };

    match stream_reply(&app, &client, &payload).await {
        Ok(()) => {
            let mut guard = app.lock().await;
            guard.logs.add("reply complete");
        }
        Err(e) => {
            log::error!("chat turn failed: {}", e);
            let mut guard = app.lock().await;
            guard.logs.add(format!("error: {}", e));
            guard.conversation = guard
                .conversation
                .replace_last(Message::assistant(FALLBACK_REPLY));
        }
    }

    let mut guard = app.lock().await;
    guard.send_state = SendState::Idle;
    guard.status.set_sending(false);
}

/// Reads the reply chunk by chunk, applying each decoded fragment to the
/// last message. The lock is held only per update so the draw loop
/// observes intermediate snapshots.
async fn stream_reply(
    app: &Arc<Mutex<App>>,
    client: &ChatClient,
    payload: &[Message],
) -> HelpbotResult<()> {
    let mut stream = client.open_stream(payload).await?;
    while let Some(text) = stream.next_text().await? {
        let mut guard = app.lock().await;
        guard.conversation = guard.conversation.append_to_last(&text);
        guard.autoscroll();
    }
    Ok(())
}
