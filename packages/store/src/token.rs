//! # Token expiry oracle
//!
//! Access tokens are JWTs whose payload carries an `exp` claim (Unix seconds).
//! The client never verifies signatures; it only reads the payload to decide
//! whether a token is worth sending. [`is_expired`] fails closed: a token that
//! cannot be decoded, or has no `exp`, is treated as expired.
//!
//! Time is always passed in. [`Clock`] abstracts "now" so callers can inject a
//! fixed clock in tests; [`SystemClock`] uses `js_sys::Date::now()` on WASM and
//! `std::time::SystemTime` on native.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;

/// Claims the dashboard reads from an access token payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenClaims {
    /// Expiry (NumericDate: Unix seconds, possibly fractional).
    pub exp: f64,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Decode the payload segment of a JWT without verifying the signature.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut parts = token.split('.');
    let (_header, payload) = (parts.next()?, parts.next()?);
    if payload.is_empty() {
        return None;
    }
    // Some issuers pad their segments; strip it so the no-pad engine accepts it.
    let payload = payload.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Expiry claim of a token, if it can be decoded.
pub fn expires_at(token: &str) -> Option<f64> {
    decode_claims(token).map(|claims| claims.exp)
}

/// `true` when the token's `exp` is at or before `now`, or when it cannot be decoded.
pub fn is_expired(token: &str, now: u64) -> bool {
    match expires_at(token) {
        Some(exp) => exp <= now as f64,
        None => true,
    }
}

/// Source of the current Unix time in seconds.
pub trait Clock {
    fn now(&self) -> u64;
}

/// Wall-clock time of the running platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        current_timestamp()
    }
}

fn current_timestamp() -> u64 {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        (js_sys::Date::now() / 1000.0) as u64
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build an unsigned JWT-shaped token with the given payload.
    pub(crate) fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.signature")
    }

    pub(crate) fn token_expiring_at(exp: u64) -> String {
        token_with_payload(&format!(r#"{{"sub":"EMP1","role":"manager","exp":{exp}}}"#))
    }

    const NOW: u64 = 1_700_000_000;

    #[test]
    fn test_past_expiry_is_expired() {
        assert!(is_expired(&token_expiring_at(NOW - 1), NOW));
        assert!(is_expired(&token_expiring_at(0), NOW));
    }

    #[test]
    fn test_future_expiry_is_valid() {
        assert!(!is_expired(&token_expiring_at(NOW + 1), NOW));
        assert!(!is_expired(&token_expiring_at(NOW + 3600), NOW));
    }

    #[test]
    fn test_expiry_boundary_counts_as_expired() {
        assert!(is_expired(&token_expiring_at(NOW), NOW));
    }

    #[test]
    fn test_malformed_tokens_fail_closed() {
        for bad in [
            "",
            "not-a-jwt",
            "a.b",
            "header.!!!.sig",
            "header..sig",
            &token_with_payload("not json"),
            &token_with_payload(r#"{"sub":"EMP1"}"#),
            &token_with_payload(r#"{"exp":"tomorrow"}"#),
        ] {
            assert!(is_expired(bad, NOW), "{bad:?} should count as expired");
        }
    }

    #[test]
    fn test_fractional_expiry() {
        let in_an_hour = token_with_payload(r#"{"exp":1700003600.5}"#);
        assert!(!is_expired(&in_an_hour, NOW));
        assert_eq!(expires_at(&in_an_hour), Some(1_700_003_600.5));

        let half_second_ago = token_with_payload(r#"{"exp":1699999999.5}"#);
        assert!(is_expired(&half_second_ago, NOW));
    }

    #[test]
    fn test_decode_claims() {
        let claims = decode_claims(&token_expiring_at(NOW)).unwrap();
        assert_eq!(claims.exp, NOW as f64);
        assert_eq!(claims.sub.as_deref(), Some("EMP1"));
        assert_eq!(claims.role.as_deref(), Some("manager"));
    }

    #[test]
    fn test_padded_payload_is_accepted() {
        let token = token_expiring_at(NOW + 10);
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        parts[1].push_str("==");
        assert_eq!(expires_at(&parts.join(".")), Some((NOW + 10) as f64));
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        assert!(SystemClock.now() > 1_577_836_800);
    }
}
