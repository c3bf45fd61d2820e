//! Compact-serialization pre-parse.
//!
//! Reads only what is needed before any key is touched: the segment count and the
//! `alg` the token claims for itself. The declared value is treated as untrusted input.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompactError {
    #[error("token contains an invalid number of segments")]
    SegmentCount,
    #[error("token header is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token header is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct DeclaredHeader {
    alg: String,
}

/// Return the `alg` declared in the header segment of a three-segment token.
pub fn declared_algorithm(token: &str) -> Result<String, CompactError> {
    let mut segments = token.split('.');

    let (Some(header), Some(_payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(CompactError::SegmentCount);
    };

    let raw = URL_SAFE_NO_PAD.decode(header)?;
    let header: DeclaredHeader = serde_json::from_slice(&raw)?;

    Ok(header.alg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(json: &str) -> String {
        URL_SAFE_NO_PAD.encode(json)
    }

    #[test]
    fn reads_declared_algorithm() {
        let token = format!("{}.{}.sig", encode(r#"{"typ":"JWT","alg":"RS256"}"#), encode("{}"));
        assert_eq!(declared_algorithm(&token).unwrap(), "RS256");
    }

    #[test]
    fn empty_signature_segment_still_counts() {
        let token = format!("{}.{}.", encode(r#"{"alg":"none"}"#), encode("{}"));
        assert_eq!(declared_algorithm(&token).unwrap(), "none");
    }

    #[test]
    fn wrong_segment_count() {
        for token in ["", "thisisntajsonwebtoken", "a.b", "a.b.c.d"] {
            let err = declared_algorithm(token).unwrap_err();
            assert!(matches!(err, CompactError::SegmentCount), "{token}");
            assert_eq!(err.to_string(), "token contains an invalid number of segments");
        }
    }

    #[test]
    fn header_must_be_base64url() {
        let err = declared_algorithm("!!!.e30.sig").unwrap_err();
        assert!(matches!(err, CompactError::Base64(_)));
    }

    #[test]
    fn header_must_be_json_with_string_alg() {
        let not_json = format!("{}.e30.sig", encode("not json"));
        assert!(matches!(
            declared_algorithm(&not_json).unwrap_err(),
            CompactError::Json(_)
        ));

        let missing_alg = format!("{}.e30.sig", encode(r#"{"typ":"JWT"}"#));
        assert!(matches!(
            declared_algorithm(&missing_alg).unwrap_err(),
            CompactError::Json(_)
        ));

        let numeric_alg = format!("{}.e30.sig", encode(r#"{"alg":256}"#));
        assert!(matches!(
            declared_algorithm(&numeric_alg).unwrap_err(),
            CompactError::Json(_)
        ));
    }
}
