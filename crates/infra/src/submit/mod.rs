//! Upload endpoint integration

mod client;

pub use client::SubmissionClient;
