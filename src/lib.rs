/*
 * Responsibility
 * - `Authorization: ApiKey <token>` からの API key 抽出 (services::auth)
 * - axum 向けのアダプタ (extractor / middleware / AppError)
 * - 設定読み込み (config) と tracing 初期化 (telemetry)
 */
pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
pub mod telemetry;

pub use api::extractors::{ApiKey, ApiKeyExtractor};
pub use config::{Config, ConfigError};
pub use error::AppError;
pub use services::auth::{API_KEY_SCHEME, ApiKeyPolicy, AuthError, TokenMode, get_api_key};
pub use state::AppState;
