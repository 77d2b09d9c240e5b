// src/presentation/http/envelope.rs
//
// Uniform wrapper for successful REST responses:
// `{"statusCode": N, "status": "success", "data": ...}`. Paginated payloads
// (carrying `results` and `metaData`) get `results` promoted into `data` and
// `metaData` promoted to a top-level sibling. Error responses never pass
// through here; they are rendered by `error::HttpError`.

use crate::presentation::http::error::HttpError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

pub fn success_body(status_code: u16, data: Value) -> Value {
    let mut body = json!({
        "statusCode": status_code,
        "status": "success",
        "data": data,
    });

    let paginated = body["data"]
        .as_object()
        .is_some_and(|inner| inner.contains_key("results") && inner.contains_key("metaData"));

    if paginated {
        let Value::Object(mut inner) = body["data"].take() else {
            return body;
        };
        // contains_key checked above, so both removes yield values
        let results = inner.remove("results").unwrap_or(Value::Null);
        let meta_data = inner.remove("metaData").unwrap_or(Value::Null);

        if let Some(envelope) = body.as_object_mut() {
            envelope.insert("data".into(), results);
            envelope.insert("metaData".into(), meta_data);
        }
    }

    body
}

/// Response writer applying the success envelope to any serializable payload.
pub struct Enveloped<T>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for Enveloped<T> {
    fn into_response(self) -> Response {
        match serde_json::to_value(&self.1) {
            Ok(data) => (self.0, Json(success_body(self.0.as_u16(), data))).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize response payload");
                HttpError::internal().into_response()
            }
        }
    }
}
