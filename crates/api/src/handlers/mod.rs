//! HTTP request handlers

mod health;
mod submit;

pub use health::health;
pub use submit::submit;
