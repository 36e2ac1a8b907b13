//! Property tests for API key extraction.

use api_key_auth::{ApiKeyPolicy, AuthError, get_api_key};
use axum::http::{HeaderMap, HeaderName, HeaderValue, header::AUTHORIZATION};
use proptest::prelude::*;

fn with_authorization(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

// Strategy: tokens made of visible ASCII without spaces
fn arb_token() -> impl Strategy<Value = String> {
    prop::string::string_regex("[!-~]{1,40}").unwrap()
}

// Strategy: header names other than Authorization
fn arb_other_header_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("x-[a-z]{1,12}").unwrap()
}

proptest! {
    /// Property: without an Authorization header the result is always NoAuthHeader
    #[test]
    fn proptest_missing_header_is_no_auth_header(
        others in prop::collection::vec((arb_other_header_name(), arb_token()), 0..5)
    ) {
        let mut headers = HeaderMap::new();
        for (name, value) in &others {
            headers.append(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }

        prop_assert_eq!(get_api_key(&headers), Err(AuthError::NoAuthHeader));
        prop_assert_eq!(ApiKeyPolicy::strict().extract(&headers), Err(AuthError::NoAuthHeader));
    }

    /// Property: a single token without a space is always malformed
    #[test]
    fn proptest_single_token_is_malformed(value in arb_token()) {
        let headers = with_authorization(&value);
        prop_assert_eq!(get_api_key(&headers), Err(AuthError::MalformedHeader));
    }

    /// Property: any scheme other than the exact `ApiKey` literal is malformed
    #[test]
    fn proptest_other_scheme_is_malformed(
        scheme in arb_token().prop_filter("exact scheme", |s| s != "ApiKey"),
        token in arb_token()
    ) {
        let headers = with_authorization(&format!("{scheme} {token}"));
        prop_assert_eq!(get_api_key(&headers), Err(AuthError::MalformedHeader));
    }

    /// Property: case variants of the scheme are rejected
    #[test]
    fn proptest_scheme_case_variants_are_malformed(
        flips in prop::collection::vec(any::<bool>(), 6),
        token in arb_token()
    ) {
        let scheme: String = "ApiKey"
            .chars()
            .zip(&flips)
            .map(|(c, flip)| if *flip { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect();
        prop_assume!(scheme != "ApiKey");

        let headers = with_authorization(&format!("{scheme} {token}"));
        prop_assert_eq!(get_api_key(&headers), Err(AuthError::MalformedHeader));
    }

    /// Property: a well-formed header returns the token in both modes
    #[test]
    fn proptest_well_formed_header_returns_token(token in arb_token()) {
        let headers = with_authorization(&format!("ApiKey {token}"));
        prop_assert_eq!(get_api_key(&headers), Ok(token.as_str()));
        prop_assert_eq!(ApiKeyPolicy::strict().extract(&headers), Ok(token.as_str()));
    }

    /// Property: extra leading spaces yield an empty token by default, strict rejects them
    #[test]
    fn proptest_extra_spaces_quirk(token in arb_token(), extra in 1usize..4) {
        let value = format!("ApiKey {}{token}", " ".repeat(extra));
        let headers = with_authorization(&value);

        prop_assert_eq!(get_api_key(&headers), Ok(""));
        prop_assert_eq!(
            ApiKeyPolicy::strict().extract(&headers),
            Err(AuthError::MalformedHeader)
        );
    }
}
