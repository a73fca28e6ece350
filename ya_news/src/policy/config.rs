use std::sync::LazyLock;

pub const DEFAULT_BANNED_WORDS: &[&str] = &["редиска", "негодяй"];
pub const DEFAULT_WARNING: &str = "Не ругайтесь!";

/// Banned-word list and the message shown when text is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationConfig {
    pub banned_words: Vec<String>,
    pub warning: String,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            banned_words: DEFAULT_BANNED_WORDS.iter().map(|w| w.to_string()).collect(),
            warning: DEFAULT_WARNING.to_string(),
        }
    }
}

impl ModerationConfig {
    pub fn new(banned_words: Vec<String>, warning: impl Into<String>) -> Self {
        Self {
            banned_words,
            warning: warning.into(),
        }
    }

    fn from_env_values(words: Option<&str>, warning: Option<&str>) -> Self {
        let defaults = Self::default();
        let banned_words = words
            .map(parse_word_list)
            .unwrap_or(defaults.banned_words);
        let warning = warning
            .filter(|w| !w.trim().is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.warning);
        Self {
            banned_words,
            warning,
        }
    }
}

// Empty entries are dropped: an empty banned word would match every text.
fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Process-wide moderation settings, read once
///
/// `YN_BANNED_WORDS` is a comma separated list; `YN_BANNED_WORDS_WARNING`
/// replaces the rejection message.
pub static MODERATION_CONFIG: LazyLock<ModerationConfig> = LazyLock::new(|| {
    let words = std::env::var("YN_BANNED_WORDS").ok();
    let warning = std::env::var("YN_BANNED_WORDS_WARNING").ok();
    let config = ModerationConfig::from_env_values(words.as_deref(), warning.as_deref());
    tracing::info!(
        "Moderation configured with {} banned words",
        config.banned_words.len()
    );
    config
});
