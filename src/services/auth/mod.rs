pub mod api_key;

pub use api_key::{API_KEY_SCHEME, ApiKeyPolicy, AuthError, TokenMode, get_api_key};
