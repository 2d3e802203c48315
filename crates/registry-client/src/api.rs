//! HTTP client for the registry API.
//!
//! # Purpose
//! Thin wrapper over `reqwest` for the five CRUD endpoints. Tolerates both
//! list response shapes the server has shipped over time (an `items` envelope
//! and a bare array) and both error body keys (`message` and `error`).
//!
//! # Notes
//! No retries and no request cancellation: a failed call surfaces one error
//! and the operator retries by hand.
use registry_model::normalize::RawGraduate;
use registry_model::{Graduate, GraduateFields};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The response body was not in any shape we recognize.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct DeleteResponse {
    message: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/graduates", self.base_url)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/api/graduates/{id}", self.base_url)
    }

    /// Fetch the full record list, newest first.
    pub async fn list(&self) -> Result<Vec<Graduate>, ClientError> {
        let response = self.http.get(self.collection_url()).send().await?;
        let body = check_status(response).await?;
        let records = decode_list(&body)?;
        tracing::debug!(count = records.len(), "fetched graduate list");
        Ok(records)
    }

    /// Fetch one record by id.
    pub async fn get(&self, id: &str) -> Result<Graduate, ClientError> {
        let response = self.http.get(self.record_url(id)).send().await?;
        let body = check_status(response).await?;
        decode_record(&body)
    }

    /// Create a record; returns it with the store-assigned id and timestamp.
    pub async fn create(&self, fields: &GraduateFields) -> Result<Graduate, ClientError> {
        let response = self
            .http
            .post(self.collection_url())
            .json(fields)
            .send()
            .await?;
        let body = check_status(response).await?;
        decode_record(&body)
    }

    /// Replace the editable fields of an existing record.
    pub async fn update(&self, id: &str, fields: &GraduateFields) -> Result<Graduate, ClientError> {
        let response = self
            .http
            .put(self.record_url(id))
            .json(fields)
            .send()
            .await?;
        let body = check_status(response).await?;
        decode_record(&body)
    }

    /// Delete a record; returns the server's confirmation message.
    pub async fn delete(&self, id: &str) -> Result<String, ClientError> {
        tracing::debug!(id, "deleting graduate");
        let response = self.http.delete(self.record_url(id)).send().await?;
        let body = check_status(response).await?;
        let confirmation: DeleteResponse =
            serde_json::from_str(&body).map_err(|err| ClientError::Decode(err.to_string()))?;
        Ok(confirmation.message)
    }
}

async fn check_status(response: reqwest::Response) -> Result<String, ClientError> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(api_error(status, &body))
    }
}

/// Reduce a non-2xx response to one displayable message.
///
/// Error bodies carry either a `message` or an `error` string depending on
/// the server revision; with neither, fall back to the HTTP status line.
pub(crate) fn api_error(status: StatusCode, body: &str) -> ClientError {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message.or(body.error))
        .unwrap_or_else(|| {
            format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("error")
            )
        });
    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Decode a list response in either shape the server has used: an object
/// envelope with an `items` array, or a bare array.
pub fn decode_list(body: &str) -> Result<Vec<Graduate>, ClientError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|err| ClientError::Decode(err.to_string()))?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut envelope) => match envelope.remove("items") {
            Some(serde_json::Value::Array(items)) => items,
            _ => return Err(ClientError::Decode("no record array in response".into())),
        },
        _ => return Err(ClientError::Decode("no record array in response".into())),
    };
    items
        .into_iter()
        .map(|item| {
            serde_json::from_value::<RawGraduate>(item)
                .map(RawGraduate::normalize)
                .map_err(|err| ClientError::Decode(err.to_string()))
        })
        .collect()
}

fn decode_record(body: &str) -> Result<Graduate, ClientError> {
    serde_json::from_str::<RawGraduate>(body)
        .map(RawGraduate::normalize)
        .map_err(|err| ClientError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry_model::Cohort;

    fn record_json() -> serde_json::Value {
        serde_json::json!({
            "id": "abc123",
            "student_id": "20230001",
            "full_name": "Jane Smith",
            "program": "Law",
            "cohort": "2019-2023",
            "status": "graduated",
            "email": "jane@example.com",
            "created_at": "2024-05-01T12:00:00Z"
        })
    }

    #[test]
    fn decodes_enveloped_list() {
        let body = serde_json::json!({ "items": [record_json()] }).to_string();
        let records = decode_list(&body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].student_id, "20230001");
    }

    #[test]
    fn decodes_bare_array_list() {
        let body = serde_json::json!([record_json()]).to_string();
        let records = decode_list(&body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].cohort,
            Cohort::Range {
                start: 2019,
                end: 2023
            }
        );
    }

    #[test]
    fn decodes_legacy_field_names_in_lists() {
        let body = serde_json::json!([{
            "_id": "abc123",
            "studentId": "20230001",
            "fullName": "Jane Smith",
            "cohort": 2023,
            "email": "jane@example.com"
        }])
        .to_string();
        let records = decode_list(&body).unwrap();
        assert_eq!(records[0].id, "abc123");
        assert_eq!(records[0].full_name, "Jane Smith");
    }

    #[test]
    fn rejects_bodies_without_a_record_array() {
        assert!(decode_list("{\"total\": 3}").is_err());
        assert!(decode_list("\"nope\"").is_err());
        assert!(decode_list("not json").is_err());
    }

    #[test]
    fn error_bodies_yield_message_or_error_key() {
        let err = api_error(StatusCode::NOT_FOUND, "{\"message\": \"graduate not found\"}");
        assert!(matches!(err, ClientError::Api { status: 404, ref message } if message == "graduate not found"));

        let err = api_error(StatusCode::BAD_REQUEST, "{\"error\": \"bad cohort\"}");
        assert!(matches!(err, ClientError::Api { ref message, .. } if message == "bad cohort"));
    }

    #[test]
    fn unparseable_error_bodies_fall_back_to_status_line() {
        let err = api_error(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert!(matches!(err, ClientError::Api { status: 502, ref message } if message.contains("502")));
    }
}
