//! # Slotbook Infra
//!
//! Infrastructure layer: adapters for the external collaborators the core
//! ports describe.
//!
//! This crate contains:
//! - The holiday lookup client (remote holiday source, API-key header)
//! - The submission client (multipart `POST /submit`)
//! - Configuration loading (env + file)
//! - Conversions from external errors into domain errors

pub mod config;
pub mod errors;
pub mod holidays;
pub mod submit;

pub use errors::InfraError;
pub use holidays::HolidayApiClient;
pub use submit::SubmissionClient;
