//! Configuration management

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub holidays: HolidayApiConfig,
    pub submit: SubmitConfig,
}

/// Upload endpoint server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listening port for the upload endpoint
    pub port: u16,
    /// Directory where uploaded photos are stored
    pub upload_dir: String,
}

/// Holiday lookup API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidayApiConfig {
    pub base_url: String,
    /// Value sent in the `X-Api-Key` header
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Country code passed as the `country` query parameter
    pub country: String,
    /// Year passed as the `year` query parameter
    pub year: i32,
}

/// Submission client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    /// Base URL of the upload endpoint (`/submit` is appended)
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 5000, upload_dir: "uploads".to_string() }
    }
}

impl Default for HolidayApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.api-ninjas.com/v1/holidays".to_string(),
            api_key: String::new(),
            country: "PL".to_string(),
            year: 2024,
        }
    }
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self { base_url: "http://localhost:5000".to_string() }
    }
}
