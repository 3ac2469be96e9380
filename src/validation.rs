//! Structural checks on incoming payloads.
//!
//! Only decodability and the chirp length limit are enforced here. Missing
//! or `null` fields decode to empty strings or the nil UUID and pass through,
//! and a `null` payload decodes as if every field were missing.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::api::ApiError;
use crate::request::Request;

/// Longest chirp body accepted, in characters.
pub const MAX_CHIRP_LEN: usize = 140;

/// Decodes the request body as JSON.
pub fn decode<T: DeserializeOwned + Default>(req: &Request) -> Result<T, ApiError> {
    let payload: Option<T> = req.json().map_err(ApiError::MalformedRequest)?;
    Ok(payload.unwrap_or_default())
}

/// Field deserializer mapping `null` to the type's default. Pair it with
/// `#[serde(default)]` so absent fields behave the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Rejects bodies over [`MAX_CHIRP_LEN`] characters.
pub fn check_chirp_len(body: &str) -> Result<(), ApiError> {
    let len = body.chars().count();
    if len > MAX_CHIRP_LEN {
        return Err(ApiError::TooLong { len, max: MAX_CHIRP_LEN });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;
    use rstest::rstest;

    #[derive(Debug, Default, Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "null_as_default")]
        body: String,
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(140)]
    fn accepts_up_to_limit(#[case] len: usize) {
        assert!(check_chirp_len(&"a".repeat(len)).is_ok());
    }

    #[rstest]
    #[case(141)]
    #[case(500)]
    fn rejects_over_limit(#[case] len: usize) {
        let err = check_chirp_len(&"a".repeat(len)).unwrap_err();
        assert!(matches!(err, ApiError::TooLong { len: l, max: 140 } if l == len));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let body = "é".repeat(140);
        assert_eq!(body.len(), 280);
        assert!(check_chirp_len(&body).is_ok());
    }

    #[rstest]
    #[case("{}")]
    #[case(r#"{"body": null}"#)]
    #[case("null")]
    fn missing_or_null_decodes_to_defaults(#[case] raw: &'static str) {
        let req = Request::new(Method::Post, "/api/validate_chirp", raw);
        let decoded: Body = decode(&req).unwrap();
        assert_eq!(decoded.body, "");
    }

    #[rstest]
    #[case("")]
    #[case("not json")]
    #[case(r#"{"body": 42}"#)]
    fn undecodable_payloads_are_malformed(#[case] raw: &'static str) {
        let req = Request::new(Method::Post, "/api/validate_chirp", raw);
        assert!(matches!(decode::<Body>(&req), Err(ApiError::MalformedRequest(_))));
    }
}
