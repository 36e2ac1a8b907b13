/*
 * Responsibility
 * - 環境変数から API key 抽出の設定を読み込む (API_KEY_TOKEN_MODE)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;

use crate::services::auth::{ApiKeyPolicy, TokenMode};

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub token_mode: TokenMode,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (env, test fixtures).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token_mode = match lookup("API_KEY_TOKEN_MODE")
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("") | Some("verbatim") => TokenMode::Verbatim,
            Some("strict") => TokenMode::Strict,
            Some(_) => return Err(ConfigError::Invalid("API_KEY_TOKEN_MODE")),
        };

        Ok(Self { token_mode })
    }

    pub fn policy(&self) -> ApiKeyPolicy {
        ApiKeyPolicy::new(self.token_mode)
    }
}
