//! Status-driven response decoding.

use serde::de::DeserializeOwned;

use crate::transport::RawResponse;
use crate::types::ErrorEnvelope;
use crate::Error;

/// The only status for which a success payload is trusted.
pub const STATUS_OK: u16 = 200;

/// Decodes `raw` into `T` when the status is 200, otherwise into the error
/// envelope, which is surfaced as [`Error::Api`].
pub fn decode_response<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, Error> {
    if raw.status != STATUS_OK {
        return Err(decode_error(raw));
    }

    serde_json::from_slice::<T>(&raw.body).map_err(|e| {
        tracing::error!(
            "Failed to parse response: {} | body: {}",
            e,
            truncate_body(&raw.body_text())
        );
        Error::Decode {
            status: raw.status,
            source: e,
        }
    })
}

fn decode_error(raw: &RawResponse) -> Error {
    match serde_json::from_slice::<ErrorEnvelope>(&raw.body) {
        Ok(envelope) => {
            tracing::error!(
                "Request failed with status {}: {}: {}",
                raw.status,
                envelope.code,
                envelope.message
            );
            Error::Api {
                code: envelope.code,
                message: envelope.message,
            }
        }
        Err(e) => {
            tracing::error!(
                "Got status {} with unreadable error body: {} | body: {}",
                raw.status,
                e,
                truncate_body(&raw.body_text())
            );
            Error::Decode {
                status: raw.status,
                source: e,
            }
        }
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Response;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Created {
        id: i64,
    }

    #[test]
    fn ok_status_decodes_payload() {
        let raw = RawResponse::new(200, r#"{"response":{"id":17,"extra":true}}"#);
        let decoded: Response<Created> = decode_response(&raw).unwrap();
        assert_eq!(decoded.response.id, 17);
    }

    #[test]
    fn ok_status_with_bad_body_is_decode_error() {
        let raw = RawResponse::new(200, "{not valid json}");
        let err = decode_response::<Response<Created>>(&raw).unwrap_err();
        assert!(matches!(err, Error::Decode { status: 200, .. }));
    }

    #[test]
    fn non_ok_status_yields_api_error() {
        let raw = RawResponse::new(404, r#"{"code":4,"message":"not found"}"#);
        let err = decode_response::<Response<Created>>(&raw).unwrap_err();
        match err {
            Error::Api { code, message } => {
                assert_eq!(code, 4);
                assert_eq!(message, "not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_ok_status_never_trusts_success_shape() {
        // Body is a valid success envelope, but the status says otherwise.
        let raw = RawResponse::new(500, r#"{"response":{"id":1}}"#);
        let err = decode_response::<Response<Created>>(&raw).unwrap_err();
        assert!(matches!(err, Error::Api { code: 0, .. }));
    }

    #[test]
    fn non_ok_status_with_unreadable_body_is_decode_error() {
        let raw = RawResponse::new(502, "<html>Bad Gateway</html>");
        let err = decode_response::<Response<Created>>(&raw).unwrap_err();
        assert!(matches!(err, Error::Decode { status: 502, .. }));
    }

    #[test]
    fn non_ok_status_with_array_body_is_decode_error() {
        let raw = RawResponse::new(500, r#"[9,"boom"]"#);
        let err = decode_response::<Response<Created>>(&raw).unwrap_err();
        assert!(matches!(err, Error::Decode { status: 500, .. }));
    }

    #[test]
    fn created_status_is_not_success() {
        let raw = RawResponse::new(201, r#"{"code":1,"message":"created elsewhere"}"#);
        let err = decode_response::<Response<Created>>(&raw).unwrap_err();
        assert_eq!(err.api_code(), Some(1));
    }

    #[test]
    fn truncate_long_body() {
        let body = "x".repeat(2500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
        assert_eq!(truncate_body("short"), "short");
    }
}
