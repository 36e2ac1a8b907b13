/*
 * Responsibility
 * - `Authorization: ApiKey <token>` ヘッダから token を取り出す (純粋関数)
 * - 形式エラーの分類 (AuthError)
 * - key の照合・認可判断はしない (呼び出し側の責務)
 *
 * Notes
 * - ここではログを出さない。拒否時のログは middleware/extractor 側で出す
 */
use axum::http::{HeaderMap, header::AUTHORIZATION};
use thiserror::Error;

/// Scheme token expected in front of the key. Compared case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// How the part after the scheme is turned into a token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenMode {
    /// Split on every single space and return the second piece as-is.
    ///
    /// `"ApiKey  12345"` yields `""` and `"ApiKey a b"` yields `"a"`.
    #[default]
    Verbatim,
    /// Split once; the rest must be a non-empty token without whitespace.
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApiKeyPolicy {
    pub mode: TokenMode,
}

impl ApiKeyPolicy {
    pub fn new(mode: TokenMode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(TokenMode::Strict)
    }

    /// Returns the token carried by the `Authorization` header.
    ///
    /// Only the first `Authorization` value is considered. A value that is not
    /// visible ASCII counts as malformed.
    pub fn extract<'h>(&self, headers: &'h HeaderMap) -> Result<&'h str, AuthError> {
        let value = headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::NoAuthHeader)?
            .to_str()
            .map_err(|_| AuthError::MalformedHeader)?;

        match self.mode {
            TokenMode::Verbatim => split_verbatim(value),
            TokenMode::Strict => split_strict(value),
        }
    }
}

/// Extracts the API key with the default (verbatim) policy.
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    ApiKeyPolicy::default().extract(headers)
}

fn split_verbatim(value: &str) -> Result<&str, AuthError> {
    let mut parts = value.split(' ');
    match (parts.next(), parts.next()) {
        (Some(API_KEY_SCHEME), Some(token)) => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

fn split_strict(value: &str) -> Result<&str, AuthError> {
    let (scheme, token) = value.split_once(' ').ok_or(AuthError::MalformedHeader)?;
    if scheme != API_KEY_SCHEME || token.is_empty() || token.contains(char::is_whitespace) {
        return Err(AuthError::MalformedHeader);
    }
    Ok(token)
}
