use challenges_core::{ChallengeError, ChallengeResult};

pub fn copy_to_clipboard(text: &str) -> ChallengeResult<()> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text))
        .map_err(|e| ChallengeError::Internal(format!("clipboard unavailable: {}", e)))
}
