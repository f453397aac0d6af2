//! Holiday lookup client
//!
//! Talks to the holidays provider: `GET {base_url}?country=..&year=..` with
//! an `X-Api-Key` header, returning an ordered list of holiday records.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use slotbook_core::HolidayProvider;
use slotbook_domain::{Holiday, HolidayApiConfig, HolidayKind, Result, SlotbookError};
use tracing::debug;

use crate::errors::InfraError;

/// Client for the remote holiday source
#[derive(Clone)]
pub struct HolidayApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HolidayApiClient {
    /// Create a client from configuration
    pub fn new(config: &HolidayApiConfig) -> Self {
        Self::from_parts(config.base_url.clone(), config.api_key.clone())
    }

    /// Create a client from explicit endpoint and key
    pub fn from_parts(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { client: Client::new(), base_url: base_url.into(), api_key: api_key.into() }
    }

    /// Fetch all holidays for a country and year
    pub async fn fetch(&self, country: &str, year: i32) -> Result<Vec<Holiday>> {
        debug!(country, year, "fetching holidays");

        let response = self
            .client
            .get(&self.base_url)
            .header("X-Api-Key", &self.api_key)
            .query(&[("country", country.to_string()), ("year", year.to_string())])
            .send()
            .await
            .map_err(|e| SlotbookError::from(InfraError::from(e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text =
                response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SlotbookError::Network(format!(
                "Holiday API error ({status}): {error_text}"
            )));
        }

        let raw: Vec<RawHoliday> =
            response.json().await.map_err(|e| SlotbookError::from(InfraError::from(e)))?;

        debug!(count = raw.len(), "holiday records received");
        raw.into_iter().map(RawHoliday::into_domain).collect()
    }
}

#[async_trait]
impl HolidayProvider for HolidayApiClient {
    async fn fetch_holidays(&self, country: &str, year: i32) -> Result<Vec<Holiday>> {
        self.fetch(country, year).await
    }
}

/// Wire representation of one holiday record
#[derive(Debug, Deserialize)]
struct RawHoliday {
    name: String,
    /// ISO `yyyy-MM-dd`
    date: String,
    #[serde(rename = "type")]
    kind: String,
}

impl RawHoliday {
    fn into_domain(self) -> Result<Holiday> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|e| SlotbookError::from(InfraError::from(e)))?;
        Ok(Holiday::new(date, self.name, parse_kind(&self.kind)))
    }
}

fn parse_kind(raw: &str) -> HolidayKind {
    match raw.to_ascii_lowercase().as_str() {
        "public" => HolidayKind::Public,
        "observance" => HolidayKind::Observance,
        _ => HolidayKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn holiday_body() -> serde_json::Value {
        json!([
            { "name": "Labour Day", "date": "2024-05-01", "type": "public" },
            { "name": "Flag Day", "date": "2024-05-02", "type": "observance" },
            { "name": "Mystery Day", "date": "2024-05-03", "type": "bank_holiday" }
        ])
    }

    #[tokio::test]
    async fn sends_api_key_and_query_parameters_exactly_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("X-Api-Key", "test-key"))
            .and(query_param("country", "PL"))
            .and(query_param("year", "2024"))
            .respond_with(ResponseTemplate::new(200).set_body_json(holiday_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = HolidayApiClient::from_parts(server.uri(), "test-key");
        let holidays = client.fetch("PL", 2024).await.expect("holidays");

        assert_eq!(holidays.len(), 3);
        assert_eq!(holidays[0].name, "Labour Day");
        assert_eq!(holidays[0].kind, HolidayKind::Public);
        assert_eq!(
            holidays[0].date,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
    }

    #[tokio::test]
    async fn unknown_kind_maps_to_other() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(holiday_body()))
            .mount(&server)
            .await;

        let client = HolidayApiClient::from_parts(server.uri(), "k");
        let holidays = client.fetch("PL", 2024).await.expect("holidays");

        assert_eq!(holidays[1].kind, HolidayKind::Observance);
        assert_eq!(holidays[2].kind, HolidayKind::Other);
    }

    #[tokio::test]
    async fn server_error_surfaces_as_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let client = HolidayApiClient::from_parts(server.uri(), "k");
        let err = client.fetch("PL", 2024).await.unwrap_err();
        assert!(matches!(err, SlotbookError::Network(_)));
    }

    #[tokio::test]
    async fn malformed_date_fails_the_fetch() {
        let server = MockServer::start().await;
        let body = json!([{ "name": "Broken", "date": "01/05/2024", "type": "public" }]);
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = HolidayApiClient::from_parts(server.uri(), "k");
        let err = client.fetch("PL", 2024).await.unwrap_err();
        assert!(matches!(err, SlotbookError::InvalidInput(_)));
    }
}
