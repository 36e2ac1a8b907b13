/*
 * Responsibility
 * - Handler から見える「抽出済み API key」の型
 * - middleware / extractor が生成し、handler はこの型だけを受け取る
 *
 * Notes
 * - key の照合 (store との突き合わせ) はここではしない
 * - Debug / Display には値を出さない (ログへの漏洩防止)
 */
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// 生の token を返す。ログや response に載せないこと
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
