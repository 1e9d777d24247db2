// src/session.rs
//
// Narrow session-flag collaborator: a single stored user-identifier
// string. It only decides whether the logout affordance is shown; the
// chat pipeline never reads it.

use crate::errors::{HelpbotError, HelpbotResult};
use std::{fs, path::Path, path::PathBuf};

fn session_path() -> HelpbotResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| HelpbotError::session_error("could not determine home directory"))?;
    Ok(home_dir.join(".config").join("helpbot").join("session"))
}

fn read_user_from(path: &Path) -> Option<String> {
    let user = fs::read_to_string(path).ok()?;
    let user = user.trim();
    if user.is_empty() {
        None
    } else {
        Some(user.to_string())
    }
}

fn clear_user_at(path: &Path) -> HelpbotResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(HelpbotError::session_error(format!(
            "failed to clear session: {}",
            e
        ))),
    }
}

/// The stored user identifier, if anyone is logged in.
pub fn current_user() -> Option<String> {
    let path = session_path().ok()?;
    read_user_from(&path)
}

/// Logs the user out by removing the stored identifier.
pub fn clear_user() -> HelpbotResult<()> {
    let path = session_path()?;
    clear_user_at(&path)
}
