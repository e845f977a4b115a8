//! Response envelope unwrapping
//!
//! The backend wraps every response body in `{code, data, message}`. The
//! envelope is parsed exactly once, here; on success only `data` escapes,
//! and `code`/`message` are never re-inspected downstream.

use crate::error::{ApiError, ApiResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// The uniform wrapper on every backend response.
#[derive(Debug, Deserialize)]
struct Envelope {
    code: i64,
    #[serde(default)]
    data: serde_json::Value,
    #[serde(default)]
    message: String,
}

/// Unwrap a raw response body into the caller-expected payload.
///
/// `code == 0` resolves to `data` deserialized as `T`, with no further
/// transformation; any other code is a business failure carrying `message`.
pub fn unwrap_envelope<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    let envelope: Envelope = serde_json::from_slice(body)?;
    if envelope.code == 0 {
        Ok(serde_json::from_value(envelope.data)?)
    } else {
        Err(ApiError::Business {
            code: envelope.code,
            message: envelope.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Profile {
        id: u64,
        name: String,
    }

    #[test]
    fn success_resolves_to_data_exactly() {
        let body = br#"{"code":0,"data":{"id":7,"name":"Alice"},"message":""}"#;
        let profile: Profile = unwrap_envelope(body).unwrap();
        assert_eq!(
            profile,
            Profile {
                id: 7,
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn success_with_null_data_resolves_to_none() {
        let body = br#"{"code":0,"data":null,"message":""}"#;
        let payload: Option<Profile> = unwrap_envelope(body).unwrap();
        assert!(payload.is_none());
    }

    #[test]
    fn success_with_scalar_data() {
        let body = br#"{"code":0,"data":"https://cdn.example.com/a.png","message":""}"#;
        let url: String = unwrap_envelope(body).unwrap();
        assert_eq!(url, "https://cdn.example.com/a.png");
    }

    #[test]
    fn nonzero_code_is_a_business_failure() {
        let body = br#"{"code":40000,"data":null,"message":"Invalid password"}"#;
        let error = unwrap_envelope::<Option<Profile>>(body).unwrap_err();
        assert_eq!(error.kind(), FailureKind::Business);
        match error {
            ApiError::Business { code, message } => {
                assert_eq!(code, 40000);
                assert_eq!(message, "Invalid password");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_message_defaults_to_empty() {
        let body = br#"{"code":40001,"data":null}"#;
        let error = unwrap_envelope::<Option<Profile>>(body).unwrap_err();
        match error {
            ApiError::Business { message, .. } => assert!(message.is_empty()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unparsable_body_is_a_transport_failure() {
        let body = b"<html>502 Bad Gateway</html>";
        let error = unwrap_envelope::<Profile>(body).unwrap_err();
        assert_eq!(error.kind(), FailureKind::Transport);
    }

    #[test]
    fn mismatched_payload_is_a_transport_failure() {
        let body = br#"{"code":0,"data":{"unexpected":true},"message":""}"#;
        let error = unwrap_envelope::<Profile>(body).unwrap_err();
        assert_eq!(error.kind(), FailureKind::Transport);
    }
}
