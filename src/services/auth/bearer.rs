//! `Authorization: Bearer <token>` header extraction.

use axum::http::{HeaderMap, header};

use crate::error::RejectionReason;

const BEARER_PREFIX: &str = "Bearer ";

/// Pull the raw token out of the `Authorization` header.
///
/// The header has to split into exactly two parts on `"Bearer "`: leading prefix,
/// then a remainder that does not repeat it. The token itself is not inspected here.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, RejectionReason> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(RejectionReason::MissingCredential),
    };

    let value = value
        .to_str()
        .map_err(|_| RejectionReason::MalformedScheme)?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(RejectionReason::MalformedScheme)?;

    if token.contains(BEARER_PREFIX) {
        return Err(RejectionReason::MalformedScheme);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with(value: &'static [u8]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_bytes(value).unwrap());
        headers
    }

    #[test]
    fn bearer_token_is_extracted() {
        let headers = headers_with(b"Bearer abc.def.ghi");
        assert_eq!(extract_bearer(&headers), Ok("abc.def.ghi"));
    }

    #[test]
    fn missing_header_is_missing_credential() {
        let headers = HeaderMap::new();
        assert_eq!(
            extract_bearer(&headers),
            Err(RejectionReason::MissingCredential)
        );
    }

    #[test]
    fn empty_header_is_missing_credential() {
        let headers = headers_with(b"");
        assert_eq!(
            extract_bearer(&headers),
            Err(RejectionReason::MissingCredential)
        );
    }

    #[test]
    fn bare_token_is_malformed_scheme() {
        let headers = headers_with(b"abc.def.ghi");
        assert_eq!(
            extract_bearer(&headers),
            Err(RejectionReason::MalformedScheme)
        );
    }

    #[test]
    fn other_schemes_are_malformed_scheme() {
        let values: [&[u8]; 5] = [
            b"Basic dXNlcjpwYXNz",
            b"bearer abc.def.ghi",
            b"Bearer",
            b"xBearer abc.def.ghi",
            b"Bearer Bearer abc.def.ghi",
        ];
        for value in values {
            let mut headers = HeaderMap::new();
            headers.insert(header::AUTHORIZATION, HeaderValue::from_bytes(value).unwrap());
            assert_eq!(
                extract_bearer(&headers),
                Err(RejectionReason::MalformedScheme),
                "{:?}",
                String::from_utf8_lossy(value)
            );
        }
    }

    #[test]
    fn non_ascii_header_is_malformed_scheme() {
        let headers = headers_with(b"Bearer \xff\xfe");
        assert_eq!(
            extract_bearer(&headers),
            Err(RejectionReason::MalformedScheme)
        );
    }

    #[test]
    fn empty_token_after_prefix_is_passed_through() {
        let headers = headers_with(b"Bearer ");
        assert_eq!(extract_bearer(&headers), Ok(""));
    }
}
