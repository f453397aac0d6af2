//! Multipart form intake
//!
//! Accepts the booking form's `POST /submit`: text fields plus one binary
//! `photo` part. The photo is persisted to disk; everything received is
//! echoed back in the acknowledgement. Beyond multipart parsing itself
//! there is no validation here.

use axum::extract::{Multipart, State};
use axum::Json;
use slotbook_domain::constants::{PHOTO_FIELD_NAME, SUBMIT_ACK_MESSAGE};
use slotbook_domain::{SubmittedFields, UploadAck};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::AppState;

/// `POST /submit`
pub async fn submit(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadAck>, ApiError> {
    let mut fields = SubmittedFields::default();
    let mut file = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == PHOTO_FIELD_NAME {
            let original_name = field.file_name().unwrap_or("upload").to_string();
            let bytes = field.bytes().await?;
            file = Some(state.store.store(&name, &original_name, &bytes).await?);
        } else {
            let value = field.text().await?;
            match name.as_str() {
                "firstName" => fields.first_name = Some(value),
                "lastName" => fields.last_name = Some(value),
                "email" => fields.email = Some(value),
                "age" => fields.age = Some(value),
                "date" => fields.date = Some(value),
                "time" => fields.time = Some(value),
                _ => debug!(field = %name, "ignoring unknown form field"),
            }
        }
    }

    info!(
        first_name = fields.first_name.as_deref(),
        stored_file = file.as_ref().map(|f| f.file_name.as_str()),
        "form data received"
    );

    Ok(Json(UploadAck {
        message: SUBMIT_ACK_MESSAGE.to_string(),
        form_data: fields,
        file,
    }))
}
