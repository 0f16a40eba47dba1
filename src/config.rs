use crate::locale::Locale;
use std::path::PathBuf;

pub const DECKS_DIR_VAR: &str = "LISTENING_QUIZ_DECKS_DIR";
pub const LOCALE_VAR: &str = "LISTENING_QUIZ_LOCALE";
pub const SHUFFLE_VAR: &str = "LISTENING_QUIZ_SHUFFLE";
pub const LOG_VAR: &str = "LISTENING_QUIZ_LOG";
pub const AUDIO_CMD_VAR: &str = "LISTENING_QUIZ_AUDIO_CMD";

pub const DEFAULT_DECKS_DIR: &str = "decks";
pub const DEFAULT_LOG_FILE: &str = "listening_quiz.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub decks_dir: PathBuf,
    pub locale: Locale,
    pub shuffle: bool,
    pub log_path: PathBuf,
    /// External player spawned with the audio URL as its only argument.
    pub audio_command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decks_dir: PathBuf::from(DEFAULT_DECKS_DIR),
            locale: Locale::default(),
            shuffle: false,
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            audio_command: None,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`; unset or unparsable values fall back
    /// to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            decks_dir: non_empty(DECKS_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.decks_dir),
            locale: non_empty(LOCALE_VAR)
                .and_then(|tag| Locale::parse(&tag))
                .unwrap_or(defaults.locale),
            shuffle: non_empty(SHUFFLE_VAR)
                .map(|value| parse_flag(&value))
                .unwrap_or(defaults.shuffle),
            log_path: non_empty(LOG_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_path),
            audio_command: non_empty(AUDIO_CMD_VAR).map(|cmd| cmd.trim().to_string()),
        }
    }
}
