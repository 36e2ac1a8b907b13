//! `Authorization: ApiKey <token>` を抽出 → ApiKey を extensions に入れる
//!
//! - key の照合・認可判断はしない (handler/service 側の責務)
//! - ヘッダが無い・形式が不正なら 401 (AppError) で打ち切る

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::api_key::extract_api_key;
use crate::error::AppError;
use crate::state::AppState;

/// Router 配下に API key 抽出を掛ける。
///
/// 例：
/// ```ignore
/// let notes = Router::new().route("/notes", get(list_notes));
/// let notes = middleware::auth::api_key::apply(notes, state.clone());
/// app = app.nest("/v1", notes);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, api_key_middleware))
}

async fn api_key_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let api_key = extract_api_key(&state.api_key_policy, req.headers())?;

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(api_key);

    Ok(next.run(req).await)
}
