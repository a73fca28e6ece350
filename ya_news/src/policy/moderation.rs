use super::config::ModerationConfig;
use super::errors::PolicyError;

/// Reject `text` if it contains any banned word
///
/// Matching is a case-sensitive substring search, so a banned word inside a
/// longer word also matches.
pub fn moderate(config: &ModerationConfig, text: &str) -> Result<(), PolicyError> {
    match config
        .banned_words
        .iter()
        .find(|word| text.contains(word.as_str()))
    {
        Some(word) => {
            tracing::debug!(banned_word = %word, "Comment text rejected by moderation");
            Err(PolicyError::ModerationRejected(config.warning.clone()))
        }
        None => Ok(()),
    }
}
