use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};

use crate::error::AppError;
use crate::services::auth::ApiKeyPolicy;
use crate::state::AppState;

use super::ApiKey;

/// Handler で ApiKey を受け取るための extractor
/// middleware が ApiKey を request.extensions() に insert 済みならそれを使い、
/// 未設定なら state のポリシーで Authorization ヘッダを直接解析する
pub struct ApiKeyExtractor(pub ApiKey);

impl FromRequestParts<AppState> for ApiKeyExtractor
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(key) = parts.extensions.get::<ApiKey>() {
            return Ok(Self(key.clone()));
        }

        extract_api_key(&state.api_key_policy, &parts.headers).map(ApiKeyExtractor)
    }
}

/// Runs the policy against `headers` and logs the rejection reason.
///
/// The header value itself is never logged.
pub(crate) fn extract_api_key(
    policy: &ApiKeyPolicy,
    headers: &HeaderMap,
) -> Result<ApiKey, AppError> {
    match policy.extract(headers) {
        Ok(token) => Ok(ApiKey::new(token)),
        Err(err) => {
            tracing::warn!(error = %err, mode = ?policy.mode, "api key extraction failed");
            Err(err.into())
        }
    }
}
