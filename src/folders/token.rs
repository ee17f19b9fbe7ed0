//! Opaque pagination tokens
//!
//! A token is the standard base64 (padded) encoding of a decimal offset into
//! an organization's filtered folder list. Callers treat it as opaque and only
//! go through [`encode_token`] and [`decode_token`].

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

use crate::error::TokenError;

/// Encode an offset as a pagination token.
pub fn encode_token(offset: u64) -> String {
    BASE64.encode(offset.to_string())
}

/// Decode a pagination token back into an offset.
///
/// The payload must be valid base64 whose bytes spell a decimal integer in
/// canonical form: no sign other than a leading `-`, no leading zeros. The
/// result is wide enough that every [`encode_token`] output decodes back.
/// Negative values decode successfully; rejecting them is the pager's job.
pub fn decode_token(token: &str) -> Result<i128, TokenError> {
    let bytes = BASE64
        .decode(token)
        .map_err(|e| TokenError::InvalidFormat(e.to_string()))?;

    let text = std::str::from_utf8(&bytes)
        .map_err(|_| TokenError::InvalidFormat("payload is not UTF-8".to_string()))?;

    let not_integer = || TokenError::InvalidFormat(format!("payload '{}' is not an integer", text));

    let offset = text.parse::<i128>().map_err(|_| not_integer())?;
    if offset.to_string() != text {
        return Err(not_integer());
    }

    Ok(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_reference_encoding() {
        assert_eq!(encode_token(0), "MA==");
        assert_eq!(encode_token(10), "MTA=");
        assert_eq!(encode_token(20), "MjA=");
        assert_eq!(encode_token(123), "MTIz");
    }

    #[test]
    fn test_round_trip() {
        for n in [
            0u64,
            1,
            9,
            10,
            25,
            999,
            1000,
            65_535,
            i64::MAX as u64,
            i64::MAX as u64 + 1,
            u64::MAX - 1,
            u64::MAX,
        ] {
            assert_eq!(decode_token(&encode_token(n)).unwrap(), i128::from(n));
        }
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        let err = decode_token("invalid_token").unwrap_err();
        assert!(matches!(err, TokenError::InvalidFormat(_)));
        assert!(err.to_string().starts_with("invalid token format"));
    }

    #[test]
    fn test_decode_rejects_non_integer_payload() {
        // "abc"
        let err = decode_token("YWJj").unwrap_err();
        assert!(err.to_string().contains("not an integer"));
    }

    #[test]
    fn test_decode_rejects_non_canonical_integers() {
        for payload in ["+7", "007", "-0", " 7", "7 "] {
            let token = BASE64.encode(payload);
            assert!(decode_token(&token).is_err(), "{payload:?} should be rejected");
        }
    }

    #[test]
    fn test_decode_rejects_empty_payload() {
        assert!(decode_token("").is_err());
    }

    #[test]
    fn test_decode_rejects_non_utf8_payload() {
        let token = BASE64.encode([0xff, 0xfe]);
        assert!(decode_token(&token).is_err());
    }

    #[test]
    fn test_decode_allows_negative() {
        // "-5"
        let token = BASE64.encode("-5");
        assert_eq!(decode_token(&token).unwrap(), -5);
    }
}
