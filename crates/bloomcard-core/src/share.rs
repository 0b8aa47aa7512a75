//! Share link codec for Bloomcard
//!
//! A card configuration travels inside the `f` query parameter of a
//! shareable link. The wire form is a small JSON object with stable short
//! field names, encoded with the URL-safe base64 alphabet and no padding so
//! it can sit in a query string without further escaping.
//!
//! The codec validates structure, never semantics: an unrecognized flower
//! tag or a malformed color string survives a round trip untouched, and
//! absent fields stay absent. Deciding what to do with such values is the
//! resolution layer's job (see [`crate::card::CardState::from_share`]).

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// Query parameter name carrying the share token
pub const SHARE_PARAM: &str = "f";

/// Base URL used for generated links when the caller supplies none
pub const DEFAULT_BASE_URL: &str = "bloomcard://card";

/// The configuration carried by a share link.
///
/// Field names on the wire are `type`, `fc`, and `msg`; links generated by
/// older builds keep decoding as long as those names stay stable.
///
/// # Example
///
/// ```
/// use bloomcard_core::share::ShareConfig;
///
/// let config = ShareConfig::new("rose", "#f672b0", "hi");
/// let token = config.encode().unwrap();
/// assert_eq!(ShareConfig::decode(&token).unwrap(), config);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Flower tag, e.g. `"rose"`. Passed through unvalidated.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub flower: Option<String>,
    /// Color string, e.g. `"#f672b0"`. Passed through unvalidated.
    #[serde(rename = "fc", default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Message text. The editor bounds it to 100 chars; the codec does not.
    #[serde(rename = "msg", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ShareConfig {
    /// Create a configuration with all three fields present.
    pub fn new(
        flower: impl Into<String>,
        color: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            flower: Some(flower.into()),
            color: Some(color.into()),
            message: Some(message.into()),
        }
    }

    /// Encode the configuration as a URL-safe token.
    ///
    /// The output is deterministic for identical input and contains no
    /// `+`, `/`, or `=` characters.
    ///
    /// # Errors
    ///
    /// Returns `CardError::Serialization` if JSON serialization fails.
    pub fn encode(&self) -> CardResult<String> {
        let json = serde_json::to_string(self)
            .map_err(|e| CardError::Serialization(format!("Failed to encode config: {}", e)))?;
        Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
    }

    /// Decode a token back into a configuration.
    ///
    /// # Errors
    ///
    /// Returns `CardError::InvalidToken` if:
    /// - The token is not valid unpadded URL-safe base64 (a length of
    ///   1 mod 4 has no base64 preimage and is rejected, not repaired)
    /// - The decoded bytes are not UTF-8
    /// - The text is not a JSON object
    ///
    /// A failed decode never yields a partial configuration; callers treat
    /// it as "no shared configuration present" and fall back to defaults.
    pub fn decode(token: &str) -> CardResult<Self> {
        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|e| CardError::InvalidToken(format!("Invalid base64: {}", e)))?;

        let json = String::from_utf8(bytes)
            .map_err(|e| CardError::InvalidToken(format!("Invalid UTF-8: {}", e)))?;

        let config: ShareConfig = serde_json::from_str(&json)
            .map_err(|e| CardError::InvalidToken(format!("Invalid config data: {}", e)))?;

        Ok(config)
    }
}

/// Build a full shareable link: `<base>?f=<token>`.
///
/// # Errors
///
/// Propagates encoding failures from [`ShareConfig::encode`].
pub fn share_link(base_url: &str, config: &ShareConfig) -> CardResult<String> {
    let token = config.encode()?;
    Ok(format!("{}?{}={}", base_url, SHARE_PARAM, token))
}

/// Extract the share token from a link.
///
/// Accepts a full link (the value of the `f` query parameter is returned)
/// or a bare token (returned unchanged). Absence of an `f` parameter in a
/// link that has a query string yields an empty token, which fails decoding
/// downstream rather than here.
pub fn token_from_link(link: &str) -> &str {
    let Some(query_start) = link.find('?') else {
        return link;
    };
    let query = &link[query_start + 1..];
    for pair in query.split('&') {
        if let Some(value) = pair.strip_prefix("f=") {
            return value;
        }
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_full_config() {
        let config = ShareConfig::new("tulip", "#2a9d8f", "see you at the garden");
        let token = config.encode().expect("Failed to encode");
        let decoded = ShareConfig::decode(&token).expect("Failed to decode");
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_known_token() {
        // Matches the token produced by previously deployed builds for the
        // default rose config with message "hi".
        let config = ShareConfig::new("rose", "#f672b0", "hi");
        let token = config.encode().expect("Failed to encode");
        assert_eq!(
            token,
            "eyJ0eXBlIjoicm9zZSIsImZjIjoiI2Y2NzJiMCIsIm1zZyI6ImhpIn0"
        );
        assert_eq!(ShareConfig::decode(&token).unwrap(), config);
    }

    #[test]
    fn test_tokens_are_url_safe() {
        // A message chosen to exercise base64 bytes that map to + and /
        // in the standard alphabet.
        let config = ShareConfig::new("lily", "#ffffff", "????>>>>~~~~\u{00ff}\u{00fe}");
        let token = config.encode().expect("Failed to encode");
        assert!(!token.contains('+'));
        assert!(!token.contains('/'));
        assert!(!token.contains('='));
    }

    #[test]
    fn test_unknown_values_pass_through() {
        let config = ShareConfig::new("dandelion", "not-a-color", "hey");
        let token = config.encode().expect("Failed to encode");
        let decoded = ShareConfig::decode(&token).expect("Failed to decode");
        assert_eq!(decoded.flower.as_deref(), Some("dandelion"));
        assert_eq!(decoded.color.as_deref(), Some("not-a-color"));
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let config = ShareConfig {
            message: Some("just a note".to_string()),
            ..Default::default()
        };
        let token = config.encode().expect("Failed to encode");
        let decoded = ShareConfig::decode(&token).expect("Failed to decode");
        assert_eq!(decoded.flower, None);
        assert_eq!(decoded.color, None);
        assert_eq!(decoded.message.as_deref(), Some("just a note"));
    }

    #[test]
    fn test_empty_config_roundtrip() {
        let token = ShareConfig::default().encode().expect("Failed to encode");
        assert_eq!(token, "e30");
        assert_eq!(ShareConfig::decode(&token).unwrap(), ShareConfig::default());
    }

    #[test]
    fn test_decode_garbage_is_err() {
        let result = ShareConfig::decode("not-a-valid-token-$$$");
        assert!(matches!(result, Err(CardError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_valid_base64_invalid_json() {
        // "hello" in URL-safe base64
        let result = ShareConfig::decode("aGVsbG8");
        assert!(matches!(result, Err(CardError::InvalidToken(_))));
    }

    #[test]
    fn test_share_link_shape() {
        let config = ShareConfig::new("rose", "#f672b0", "hi");
        let link = share_link(DEFAULT_BASE_URL, &config).expect("Failed to build link");
        assert!(link.starts_with("bloomcard://card?f="));
    }

    #[test]
    fn test_token_from_full_link() {
        let config = ShareConfig::new("lily", "#aabbcc", "meadow");
        let link = share_link("https://example.com/card", &config).unwrap();
        let token = token_from_link(&link);
        assert_eq!(ShareConfig::decode(token).unwrap(), config);
    }

    #[test]
    fn test_token_from_link_with_other_params() {
        let link = "https://example.com/card?utm=x&f=e30&ref=y";
        assert_eq!(token_from_link(link), "e30");
    }

    #[test]
    fn test_token_from_bare_token() {
        assert_eq!(token_from_link("e30"), "e30");
    }

    #[test]
    fn test_token_from_link_without_param() {
        let link = "https://example.com/card?utm=x";
        assert_eq!(token_from_link(link), "");
        assert!(ShareConfig::decode(token_from_link(link)).is_err());
    }
}
