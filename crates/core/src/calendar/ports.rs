//! Port interfaces for the holiday lookup
//!
//! These traits define the boundary between the calendar engine and the
//! infrastructure implementation of the remote holiday source.

use async_trait::async_trait;
use slotbook_domain::{Holiday, Result};

/// Trait for fetching the holiday list for a country and year
#[async_trait]
pub trait HolidayProvider: Send + Sync {
    /// Fetch all holiday records for the given country and year
    async fn fetch_holidays(&self, country: &str, year: i32) -> Result<Vec<Holiday>>;
}
