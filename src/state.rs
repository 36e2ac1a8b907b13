/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - API key 抽出のポリシー (ApiKeyPolicy) を保持する
 * - Clone 前提で持つ (中身は Copy なので cheap)
 */
use crate::config::Config;
use crate::services::auth::ApiKeyPolicy;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub api_key_policy: ApiKeyPolicy,
}

impl AppState {
    pub fn new(api_key_policy: ApiKeyPolicy) -> Self {
        Self { api_key_policy }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.policy())
    }
}
