use crate::error::UploadError;
use serde_json::Value;

/// Upload endpoint reply, decoded once and branched on explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerResponse {
    Parsed {
        status: Option<String>,
        detail: Option<String>,
    },
    Malformed,
}

impl ServerResponse {
    pub fn parse(body: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(_) => return ServerResponse::Malformed,
        };
        // Any valid JSON counts as parsed; only string fields are meaningful.
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);
        ServerResponse::Parsed {
            status: field("status"),
            detail: field("detail"),
        }
    }

    /// Maps an HTTP status code plus this body onto the item's terminal state.
    pub fn into_outcome(self, http_status: u16) -> Result<(), UploadError> {
        let is_2xx = (200..300).contains(&http_status);
        match (is_2xx, self) {
            (true, ServerResponse::Malformed) => Err(UploadError::ResponseParse),
            (true, ServerResponse::Parsed { status, .. }) if status.as_deref() == Some("success") => {
                Ok(())
            }
            (_, ServerResponse::Parsed { detail, .. }) => Err(UploadError::server(detail)),
            (false, ServerResponse::Malformed) => Err(UploadError::server(None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_body() {
        let response = ServerResponse::parse(br#"{"status":"success","file_id":"42"}"#);
        assert_eq!(response.into_outcome(200), Ok(()));
    }

    #[test]
    fn reported_failure_uses_detail() {
        let response = ServerResponse::parse(br#"{"status":"failed","detail":"quota exceeded"}"#);
        assert_eq!(
            response.into_outcome(200),
            Err(UploadError::ServerReported("quota exceeded".into()))
        );
    }

    #[test]
    fn reported_failure_without_detail() {
        let response = ServerResponse::parse(br#"{"status":"failed"}"#);
        assert_eq!(
            response.into_outcome(201).unwrap_err().to_string(),
            "upload failed"
        );
    }

    #[test]
    fn malformed_2xx_body() {
        let response = ServerResponse::parse(b"<html>oops</html>");
        assert_eq!(response, ServerResponse::Malformed);
        assert_eq!(response.into_outcome(200), Err(UploadError::ResponseParse));
    }

    #[test]
    fn json_without_fields_is_a_generic_failure() {
        let response = ServerResponse::parse(b"[1,2]");
        assert_eq!(
            response,
            ServerResponse::Parsed {
                status: None,
                detail: None
            }
        );
        assert_eq!(
            response.into_outcome(200).unwrap_err().to_string(),
            "upload failed"
        );
    }

    #[test]
    fn structured_detail_is_not_shown() {
        let response = ServerResponse::parse(br#"{"detail":[{"msg":"field required"}]}"#);
        assert_eq!(
            response.into_outcome(422).unwrap_err().to_string(),
            "upload failed"
        );
    }

    #[test]
    fn error_status_with_detail() {
        let response = ServerResponse::parse(br#"{"detail":"file too large"}"#);
        assert_eq!(
            response.into_outcome(413).unwrap_err().to_string(),
            "file too large"
        );
    }

    #[test]
    fn error_status_with_unparsable_body() {
        let response = ServerResponse::parse(b"Internal Server Error");
        assert_eq!(
            response.into_outcome(500).unwrap_err().to_string(),
            "upload failed"
        );
    }

    #[test]
    fn error_status_ignores_success_field() {
        let response = ServerResponse::parse(br#"{"status":"success"}"#);
        assert_eq!(
            response.into_outcome(502).unwrap_err().to_string(),
            "upload failed"
        );
    }
}
