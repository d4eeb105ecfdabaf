use crate::clock::utc_timestamp;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API version reported by the root greeting endpoint.
pub const API_VERSION: &str = "1.0.0";

/// # Greeting Response
///
/// Payload returned by the root endpoint.
///
/// ## Fields
/// - `message`: The literal greeting "Hello World!"
/// - `timestamp`: ISO 8601 UTC timestamp, computed fresh per request
/// - `version`: API version string
///
/// ## Example JSON
/// ```json
/// {
///   "message": "Hello World!",
///   "timestamp": "2024-03-10T15:30:45.123456Z",
///   "version": "1.0.0"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct GreetingResponse {
    pub message: String,
    pub timestamp: String,
    pub version: String,
}

impl GreetingResponse {
    pub fn hello_world() -> Self {
        Self {
            message: "Hello World!".to_string(),
            timestamp: utc_timestamp(),
            version: API_VERSION.to_string(),
        }
    }
}

/// # Personalized Greeting Response
///
/// Payload returned by `GET /hello/{name}`. The name is substituted into the
/// message verbatim as decoded from the path segment: no trimming, no
/// normalization, no case change.
///
/// ## Example JSON
/// ```json
/// {
///   "message": "Hello, John!",
///   "timestamp": "2024-03-10T15:30:45.123456Z"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct PersonalizedGreeting {
    pub message: String,
    pub timestamp: String,
}

impl PersonalizedGreeting {
    pub fn for_name(name: &str) -> Self {
        Self {
            message: format!("Hello, {}!", name),
            timestamp: utc_timestamp(),
        }
    }
}
