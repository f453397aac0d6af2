//! Submission client
//!
//! Packages a validated booking into one multipart `POST /submit`: text
//! parts for every non-empty field, one binary part for the photo. Empty or
//! absent fields are omitted from the payload. No retries: a failed
//! submission is reported back and left to the user.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use slotbook_core::SubmissionGateway;
use slotbook_domain::{BookingSubmission, Result, SlotbookError, SubmitConfig, UploadAck};
use tracing::debug;

use crate::errors::InfraError;

/// Client for the upload endpoint
#[derive(Clone)]
pub struct SubmissionClient {
    client: Client,
    base_url: String,
}

impl SubmissionClient {
    /// Create a client from configuration
    pub fn new(config: &SubmitConfig) -> Self {
        Self::from_base_url(config.base_url.clone())
    }

    /// Create a client posting to `{base_url}/submit`
    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        Self { client: Client::new(), base_url: base_url.into() }
    }

    /// Send one booking and parse the JSON acknowledgement
    pub async fn send_booking(&self, submission: BookingSubmission) -> Result<UploadAck> {
        let url = format!("{}/submit", self.base_url.trim_end_matches('/'));
        let form = build_form(submission)?;

        debug!(%url, "posting booking submission");
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SlotbookError::from(InfraError::from(e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text =
                response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SlotbookError::Network(format!(
                "Upload endpoint error ({status}): {error_text}"
            )));
        }

        response.json().await.map_err(|e| SlotbookError::from(InfraError::from(e)))
    }
}

#[async_trait]
impl SubmissionGateway for SubmissionClient {
    async fn submit_booking(&self, submission: BookingSubmission) -> Result<UploadAck> {
        self.send_booking(submission).await
    }
}

fn build_form(submission: BookingSubmission) -> Result<Form> {
    let mut form = Form::new();

    for (name, value) in [
        ("firstName", submission.first_name),
        ("lastName", submission.last_name),
        ("email", submission.email),
    ] {
        if !value.is_empty() {
            form = form.text(name, value);
        }
    }

    form = form.text("age", submission.age.to_string());

    if let Some(date) = submission.date {
        form = form.text("date", date.format("%Y-%m-%d").to_string());
    }
    if let Some(time) = submission.time {
        if !time.is_empty() {
            form = form.text("time", time);
        }
    }

    if let Some(photo) = submission.photo {
        let mut part = Part::bytes(photo.bytes).file_name(photo.file_name);
        if let Some(content_type) = &photo.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| SlotbookError::from(InfraError::from(e)))?;
        }
        form = form.part("photo", part);
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;
    use slotbook_domain::PhotoAttachment;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn submission() -> BookingSubmission {
        BookingSubmission {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@lee.com".to_string(),
            age: 8,
            date: NaiveDate::from_ymd_opt(2024, 5, 7),
            time: Some("14:00".to_string()),
            photo: Some(PhotoAttachment {
                file_name: "me.png".to_string(),
                content_type: Some("image/png".to_string()),
                bytes: vec![0x89, 0x50, 0x4e, 0x47],
            }),
        }
    }

    fn ack_body() -> serde_json::Value {
        json!({
            "message": "Form data received successfully",
            "formData": {
                "firstName": "Ann",
                "lastName": "Lee",
                "email": "ann@lee.com",
                "age": "8",
                "date": "2024-05-07",
                "time": "14:00"
            },
            "file": {
                "fieldName": "photo",
                "originalName": "me.png",
                "fileName": "photo-123.png",
                "path": "uploads/photo-123.png",
                "size": 4
            }
        })
    }

    #[tokio::test]
    async fn posts_exactly_one_multipart_request_with_all_parts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/submit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ack_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = SubmissionClient::from_base_url(server.uri());
        let ack = client.send_booking(submission()).await.expect("ack");

        assert_eq!(ack.message, "Form data received successfully");
        assert_eq!(ack.form_data.first_name.as_deref(), Some("Ann"));
        assert_eq!(ack.file.as_ref().map(|f| f.size), Some(4));

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        let content_type = request.headers.get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data"));

        let body = String::from_utf8_lossy(&request.body);
        for field in ["firstName", "lastName", "email", "age", "date", "time", "photo"] {
            assert!(body.contains(&format!("name=\"{field}\"")), "missing part {field}");
        }
        assert!(body.contains("filename=\"me.png\""));
    }

    #[tokio::test]
    async fn empty_and_absent_fields_are_omitted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/submit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Form data received successfully",
                "formData": {},
                "file": null
            })))
            .mount(&server)
            .await;

        let client = SubmissionClient::from_base_url(server.uri());
        let partial = BookingSubmission {
            first_name: "Ann".to_string(),
            last_name: String::new(),
            email: "ann@lee.com".to_string(),
            age: 8,
            date: None,
            time: None,
            photo: None,
        };
        client.send_booking(partial).await.expect("ack");

        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains("name=\"firstName\""));
        assert!(!body.contains("name=\"lastName\""));
        assert!(!body.contains("name=\"date\""));
        assert!(!body.contains("name=\"time\""));
        assert!(!body.contains("name=\"photo\""));
    }

    #[tokio::test]
    async fn non_2xx_is_reported_as_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/submit"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .expect(1)
            .mount(&server)
            .await;

        let client = SubmissionClient::from_base_url(server.uri());
        let err = client.send_booking(submission()).await.unwrap_err();
        assert!(matches!(err, SlotbookError::Network(_)));
    }
}
