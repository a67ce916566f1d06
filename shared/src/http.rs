//! HTTP helpers for the Lambda handler.

use lambda_http::{Body, Response};
use serde::Serialize;
use serde_json::Value;

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(status: u16, data: &T) -> Result<Response<Body>, lambda_http::Error> {
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::from(serde_json::to_string(data)?))?)
}

/// Create an error response with the given status code and message.
pub fn error_response(status: u16, message: impl Into<String>) -> Result<Response<Body>, lambda_http::Error> {
    json_response(
        status,
        &serde_json::json!({
            "error": true,
            "response": message.into(),
        }),
    )
}

/// Parse a request body as JSON. Empty or malformed bodies yield `None`.
pub fn parse_json_body(body: &Body) -> Option<Value> {
    let bytes: &[u8] = body.as_ref();
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    serde_json::from_slice(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_body() {
        assert_eq!(
            parse_json_body(&Body::from(r#"{"message":"hi"}"#)),
            Some(serde_json::json!({"message": "hi"}))
        );
        assert_eq!(parse_json_body(&Body::from("{not json")), None);
        assert_eq!(parse_json_body(&Body::Empty), None);
    }

    #[test]
    fn test_json_response_headers() {
        let response = json_response(201, &serde_json::json!({"ok": true})).unwrap();
        assert_eq!(response.status(), 201);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
    }
}
