//! Port interfaces for form submission
//!
//! The controller never talks HTTP itself; it hands the packaged submission
//! to whatever gateway implementation the session was constructed with.

use async_trait::async_trait;
use slotbook_domain::{BookingSubmission, Result, UploadAck};

/// Trait for delivering a validated booking to the upload endpoint
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Send one booking as a multipart payload and return the acknowledgement
    async fn submit_booking(&self, submission: BookingSubmission) -> Result<UploadAck>;
}
