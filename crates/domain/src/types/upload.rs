//! Upload endpoint wire types
//!
//! Shared between the axum handler (producer) and the submission client
//! (consumer). Field names follow the multipart contract, hence the
//! camelCase renames.

use serde::{Deserialize, Serialize};

/// Text fields echoed back by the upload endpoint
///
/// Every field is optional: the client omits empty values from the multipart
/// payload and the endpoint echoes only what it received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmittedFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Metadata of a file persisted by the upload endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFileMeta {
    /// Multipart field the file arrived under
    pub field_name: String,
    /// File name supplied by the client
    pub original_name: String,
    /// Generated unique name on disk (original extension preserved)
    pub file_name: String,
    pub path: String,
    pub size: u64,
}

/// JSON acknowledgement returned by `POST /submit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadAck {
    pub message: String,
    pub form_data: SubmittedFields,
    /// Absent when the request carried no photo part
    pub file: Option<StoredFileMeta>,
}
