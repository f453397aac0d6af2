//! Remote holiday source integration

mod client;

pub use client::HolidayApiClient;
