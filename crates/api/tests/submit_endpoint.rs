//! End-to-end booking flow: core controller + infra submission client
//! against a live upload endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use slotbook_api::router;
use slotbook_api::storage::FileStore;
use slotbook_core::{DaySelection, FormController, HolidayProvider, SubmitOutcome};
use slotbook_domain::{FormState, Holiday, PhotoAttachment, Result};
use slotbook_infra::SubmissionClient;

const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

struct NoHolidays;

#[async_trait]
impl HolidayProvider for NoHolidays {
    async fn fetch_holidays(&self, _country: &str, _year: i32) -> Result<Vec<Holiday>> {
        Ok(Vec::new())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn spawn_server(store: Arc<FileStore>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(store)).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_endpoint_responds() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(Arc::new(FileStore::new(dir.path()))).await;

    let response = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn booking_round_trip_stores_photo_and_resets_form() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path()));
    let base = spawn_server(Arc::clone(&store)).await;

    let gateway = Arc::new(SubmissionClient::from_base_url(base));
    let mut controller = FormController::new(Arc::new(NoHolidays), gateway)
        .with_visible_month(date(2024, 5, 1));
    controller.load_holidays("PL", 2024).await;

    controller.set_first_name("Ann");
    controller.set_last_name("Lee");
    controller.set_email("ann@lee.com");
    assert_eq!(
        controller.select_day(date(2024, 5, 7)),
        DaySelection::Accepted(date(2024, 5, 7))
    );
    controller.select_time("14:00");
    controller.attach_photo(PhotoAttachment {
        file_name: "avatar.png".to_string(),
        content_type: Some("image/png".to_string()),
        bytes: PNG_BYTES.to_vec(),
    });
    assert!(controller.is_form_valid());

    let outcome = controller.submit().await;
    let SubmitOutcome::Submitted(ack) = outcome else {
        panic!("expected acknowledgement, got {outcome:?}");
    };

    assert_eq!(ack.message, "Form data received successfully");
    assert_eq!(ack.form_data.first_name.as_deref(), Some("Ann"));
    assert_eq!(ack.form_data.last_name.as_deref(), Some("Lee"));
    assert_eq!(ack.form_data.email.as_deref(), Some("ann@lee.com"));
    assert_eq!(ack.form_data.age.as_deref(), Some("8"));
    assert_eq!(ack.form_data.date.as_deref(), Some("2024-05-07"));
    assert_eq!(ack.form_data.time.as_deref(), Some("14:00"));

    let file = ack.file.expect("stored file metadata");
    assert_eq!(file.field_name, "photo");
    assert_eq!(file.original_name, "avatar.png");
    assert!(file.file_name.starts_with("photo-"));
    assert!(file.file_name.ends_with(".png"));
    assert_eq!(file.size, PNG_BYTES.len() as u64);

    let written = tokio::fs::read(dir.path().join(&file.file_name)).await.unwrap();
    assert_eq!(written, PNG_BYTES);

    // Successful submission resets the session to its defaults.
    assert_eq!(controller.form(), &FormState::default());
    assert!(!controller.errors().has_errors());
}

#[tokio::test]
async fn submission_without_photo_acknowledges_with_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path()));
    let base = spawn_server(Arc::clone(&store)).await;

    let client = SubmissionClient::from_base_url(base);
    let ack = client
        .send_booking(slotbook_domain::BookingSubmission {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@lee.com".to_string(),
            age: 8,
            date: None,
            time: None,
            photo: None,
        })
        .await
        .unwrap();

    assert!(ack.file.is_none());
    assert_eq!(ack.form_data.date, None);
    // The store directory was never created: nothing was written.
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}
