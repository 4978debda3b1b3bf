//! save-error classification

use crate::error::AppError;

const GENERIC: &str = "Something went wrong. Please try again.";

/// Maps an error from the update/load path to a stable, user-presentable
/// message. Total: never panics, never returns an empty string.
pub fn classify(err: &AppError) -> String {
    match err {
        AppError::RemoteStatus(code) => classify_status(*code),
        AppError::Transport(e) if e.is_connect() => {
            "Cannot connect to the server. Check your connection and try again.".to_string()
        }
        AppError::Transport(e) if e.is_timeout() => {
            "The request timed out. Please try again.".to_string()
        }
        AppError::Transport(_) => GENERIC.to_string(),
        other => {
            let msg = other.to_string();
            if msg.is_empty() {
                GENERIC.to_string()
            } else {
                msg
            }
        }
    }
}

fn classify_status(code: u16) -> String {
    match code {
        400 => "The server rejected the submitted data as invalid.",
        408 => "The request timed out. Please try again.",
        429 => "Too many requests. Please wait a moment and retry.",
        500 => "The server hit an internal error and is unavailable.",
        502 => "Bad gateway. The server is unavailable.",
        503 => "The server is temporarily unavailable.",
        504 => "The server took too long to respond.",
        _ => GENERIC,
    }
    .to_string()
}
