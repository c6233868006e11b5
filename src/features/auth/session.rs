//! Local session guard: decides, from the stored bearer token alone,
//! whether a navigation may proceed to a protected view or should bounce
//! back to the public entry. The check is synchronous, performs no I/O and
//! is total: malformed input of any shape yields a decision, never a panic.
//!
//! Only the token's middle (claims) segment is inspected; the signature is
//! the API's business. A token is valid iff the claims decode as JSON with
//! a numeric `exp` strictly in the future. Absence and decode failure are
//! treated identically to expiry.

use crate::features::auth::storage::TokenStore;
use base64::{
    Engine,
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
};

/// Storage key holding the bearer credential. The same key is used on both
/// the public and the protected path.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Removed on logout; never consumed by the guard itself.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Removed on logout; never consumed by the guard itself.
pub const USER_KEY: &str = "user";

/// Outcome of a guard evaluation for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Render the requested route.
    Allow,
    /// Invalid or missing session on a protected route.
    RedirectToLogin,
    /// Live session on a public route.
    RedirectToDashboard,
}

/// Result of decoding the claims segment of a stored token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeResult {
    /// Claims decoded and carried a numeric `exp` (milliseconds since epoch).
    Valid { expires_at_ms: i64 },
    /// Wrong segment count, bad base64, non-JSON claims, or missing or
    /// non-numeric `exp`.
    Malformed,
}

/// Decodes the expiry from a compact three-segment token. Accepts both the
/// URL-safe and the standard base64 alphabet since tokens observed in the
/// wild use either for the claims segment.
pub fn decode_expiry(raw: &str) -> DecodeResult {
    let Some(claims_segment) = raw.split('.').nth(1) else {
        return DecodeResult::Malformed;
    };

    let Some(claims) = URL_SAFE_NO_PAD
        .decode(claims_segment)
        .or_else(|_| STANDARD.decode(claims_segment))
        .ok()
        .and_then(|bytes| serde_json::from_slice::<serde_json::Value>(&bytes).ok())
    else {
        return DecodeResult::Malformed;
    };

    match claims.get("exp").and_then(serde_json::Value::as_f64) {
        Some(exp_seconds) => DecodeResult::Valid {
            expires_at_ms: (exp_seconds * 1000.0) as i64,
        },
        None => DecodeResult::Malformed,
    }
}

/// Gate for the protected route group. `Allow` only for a currently valid
/// token; anything else purges the credential and bounces to login.
pub fn evaluate_for_protected(tokens: &impl TokenStore) -> Decision {
    evaluate_for_protected_at(tokens, now_millis())
}

/// Clock-injected variant of [`evaluate_for_protected`].
pub fn evaluate_for_protected_at(tokens: &impl TokenStore, now_ms: i64) -> Decision {
    match stored_token(tokens) {
        Some(raw) => match decode_expiry(&raw) {
            DecodeResult::Valid { expires_at_ms } if expires_at_ms > now_ms => Decision::Allow,
            _ => {
                tokens.remove(ACCESS_TOKEN_KEY);
                Decision::RedirectToLogin
            }
        },
        None => Decision::RedirectToLogin,
    }
}

/// Gate for the public route group. A live session skips the public screens
/// entirely; a stale or malformed token is purged before allowing access.
pub fn evaluate_for_public(tokens: &impl TokenStore) -> Decision {
    evaluate_for_public_at(tokens, now_millis())
}

/// Clock-injected variant of [`evaluate_for_public`].
pub fn evaluate_for_public_at(tokens: &impl TokenStore, now_ms: i64) -> Decision {
    match stored_token(tokens) {
        Some(raw) => match decode_expiry(&raw) {
            DecodeResult::Valid { expires_at_ms } if expires_at_ms > now_ms => {
                Decision::RedirectToDashboard
            }
            _ => {
                tokens.remove(ACCESS_TOKEN_KEY);
                Decision::Allow
            }
        },
        None => Decision::Allow,
    }
}

/// Removes every credential the app ever writes. Used on logout and when a
/// protected call reports the session as rejected.
pub fn clear_session(tokens: &impl TokenStore) {
    tokens.remove(ACCESS_TOKEN_KEY);
    tokens.remove(REFRESH_TOKEN_KEY);
    tokens.remove(USER_KEY);
}

/// A token is present iff a non-empty string exists under the key.
fn stored_token(tokens: &impl TokenStore) -> Option<String> {
    tokens.get(ACCESS_TOKEN_KEY).filter(|raw| !raw.is_empty())
}

/// Current wall-clock time in milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

/// Current wall-clock time in milliseconds since the Unix epoch.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::storage::MemoryTokens;
    use serde_json::json;

    const NOW_MS: i64 = 1_700_000_000_000;
    const NOW_SECONDS: i64 = NOW_MS / 1000;

    fn token_with_claims(claims: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
        format!("{header}.{payload}.signature")
    }

    fn store_with(token: &str) -> MemoryTokens {
        let tokens = MemoryTokens::default();
        tokens.set(ACCESS_TOKEN_KEY, token);
        tokens
    }

    #[test]
    fn future_exp_allows_protected_access() {
        let tokens = store_with(&token_with_claims(&json!({ "exp": NOW_SECONDS + 3600 })));

        assert_eq!(
            evaluate_for_protected_at(&tokens, NOW_MS),
            Decision::Allow
        );
        assert!(tokens.get(ACCESS_TOKEN_KEY).is_some());
    }

    #[test]
    fn expired_token_redirects_and_is_purged() {
        let tokens = store_with(&token_with_claims(&json!({ "exp": NOW_SECONDS - 10 })));

        assert_eq!(
            evaluate_for_protected_at(&tokens, NOW_MS),
            Decision::RedirectToLogin
        );
        assert_eq!(tokens.get(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn absent_token_is_invalid_on_both_paths() {
        let tokens = MemoryTokens::default();

        assert_eq!(
            evaluate_for_protected_at(&tokens, NOW_MS),
            Decision::RedirectToLogin
        );
        assert_eq!(evaluate_for_public_at(&tokens, NOW_MS), Decision::Allow);
    }

    #[test]
    fn empty_string_counts_as_absent() {
        let tokens = store_with("");

        assert_eq!(
            evaluate_for_protected_at(&tokens, NOW_MS),
            Decision::RedirectToLogin
        );
        assert_eq!(evaluate_for_public_at(&tokens, NOW_MS), Decision::Allow);
    }

    #[test]
    fn garbage_token_never_panics() {
        let tokens = store_with("not-a-jwt");

        assert_eq!(
            evaluate_for_protected_at(&tokens, NOW_MS),
            Decision::RedirectToLogin
        );
        assert_eq!(tokens.get(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn non_numeric_exp_is_malformed() {
        let token = token_with_claims(&json!({ "exp": "tomorrow" }));
        assert_eq!(decode_expiry(&token), DecodeResult::Malformed);
    }

    #[test]
    fn missing_exp_is_malformed() {
        let token = token_with_claims(&json!({ "sub": "alice" }));
        assert_eq!(decode_expiry(&token), DecodeResult::Malformed);
    }

    #[test]
    fn non_base64_claims_segment_is_malformed() {
        assert_eq!(decode_expiry("a.$$$$.c"), DecodeResult::Malformed);
    }

    #[test]
    fn standard_alphabet_claims_are_accepted() {
        // Padded standard base64, as produced by JS `btoa`.
        let payload = STANDARD.encode(json!({ "exp": NOW_SECONDS + 60 }).to_string());
        let token = format!("header.{payload}.signature");

        assert_eq!(
            decode_expiry(&token),
            DecodeResult::Valid {
                expires_at_ms: (NOW_SECONDS + 60) * 1000
            }
        );
    }

    #[test]
    fn public_path_redirects_live_sessions_to_dashboard() {
        let tokens = store_with(&token_with_claims(&json!({ "exp": NOW_SECONDS + 3600 })));

        assert_eq!(
            evaluate_for_public_at(&tokens, NOW_MS),
            Decision::RedirectToDashboard
        );
        assert!(tokens.get(ACCESS_TOKEN_KEY).is_some());
    }

    #[test]
    fn public_path_purges_malformed_tokens_under_the_canonical_key() {
        let tokens = store_with("not-a-jwt");

        assert_eq!(evaluate_for_public_at(&tokens, NOW_MS), Decision::Allow);
        assert_eq!(tokens.get(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn expiry_comparison_is_strict() {
        // exp * 1000 == now is already expired.
        let boundary = token_with_claims(&json!({ "exp": NOW_SECONDS }));
        let tokens = store_with(&boundary);
        assert_eq!(
            evaluate_for_protected_at(&tokens, NOW_MS),
            Decision::RedirectToLogin
        );

        let fresh = token_with_claims(&json!({ "exp": NOW_SECONDS + 1 }));
        let tokens = store_with(&fresh);
        assert_eq!(evaluate_for_protected_at(&tokens, NOW_MS), Decision::Allow);
    }

    #[test]
    fn evaluation_is_idempotent_without_storage_mutation() {
        let tokens = store_with(&token_with_claims(&json!({ "exp": NOW_SECONDS + 3600 })));

        let first = evaluate_for_protected_at(&tokens, NOW_MS);
        let second = evaluate_for_protected_at(&tokens, NOW_MS);
        assert_eq!(first, second);

        let tokens = MemoryTokens::default();
        let first = evaluate_for_public_at(&tokens, NOW_MS);
        let second = evaluate_for_public_at(&tokens, NOW_MS);
        assert_eq!(first, second);
    }

    #[test]
    fn clear_session_removes_every_credential_key() {
        let tokens = store_with("token");
        tokens.set(REFRESH_TOKEN_KEY, "refresh");
        tokens.set(USER_KEY, "{}");

        clear_session(&tokens);

        assert_eq!(tokens.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(tokens.get(REFRESH_TOKEN_KEY), None);
        assert_eq!(tokens.get(USER_KEY), None);
    }

    #[test]
    fn wall_clock_evaluation_matches_injected_clock() {
        let exp = now_millis() / 1000 + 3600;
        let tokens = store_with(&token_with_claims(&json!({ "exp": exp })));

        assert_eq!(evaluate_for_protected(&tokens), Decision::Allow);
        assert_eq!(evaluate_for_public(&tokens), Decision::RedirectToDashboard);
    }
}
