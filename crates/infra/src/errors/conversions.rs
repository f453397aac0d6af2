//! Conversions from external infrastructure errors into domain errors.

use chrono::ParseError as DateParseError;
use reqwest::Error as HttpError;
use slotbook_domain::SlotbookError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SlotbookError);

impl From<InfraError> for SlotbookError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SlotbookError> for InfraError {
    fn from(value: SlotbookError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SlotbookError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for InfraError {
    fn from(error: HttpError) -> Self {
        let domain = if error.is_timeout() {
            SlotbookError::Network(format!("http request timed out: {error}"))
        } else if error.is_connect() {
            SlotbookError::Network(format!("http connection failed: {error}"))
        } else if error.is_decode() {
            SlotbookError::InvalidInput(format!("failed to decode http response: {error}"))
        } else if error.is_builder() {
            SlotbookError::Internal(format!("failed to build http request: {error}"))
        } else {
            SlotbookError::Network(format!("http request failed: {error}"))
        };
        InfraError(domain)
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → SlotbookError */
/* -------------------------------------------------------------------------- */

impl From<std::io::Error> for InfraError {
    fn from(error: std::io::Error) -> Self {
        let domain = match error.kind() {
            std::io::ErrorKind::NotFound => {
                SlotbookError::NotFound(format!("file not found: {error}"))
            }
            std::io::ErrorKind::PermissionDenied => {
                SlotbookError::Storage(format!("permission denied: {error}"))
            }
            _ => SlotbookError::Storage(format!("io failure: {error}")),
        };
        InfraError(domain)
    }
}

/* -------------------------------------------------------------------------- */
/* chrono::ParseError → SlotbookError */
/* -------------------------------------------------------------------------- */

impl From<DateParseError> for InfraError {
    fn from(error: DateParseError) -> Self {
        InfraError(SlotbookError::InvalidInput(format!("invalid date: {error}")))
    }
}
