use crate::clock::utc_timestamp;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Represents the operational status of the service with its uptime and a
/// timestamp. Used as the response format for the health check endpoint.
///
/// ## Fields
/// - `status`: String indicating service availability ("OK")
/// - `uptime`: Seconds elapsed since the service started, as a float
/// - `timestamp`: ISO 8601 formatted timestamp of the status check
///
/// ## Serialization
/// Automatically implements `Serialize` and `Deserialize` for JSON format.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "OK",
///   "uptime": 42.375,
///   "timestamp": "2024-03-10T15:30:45.123456Z"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub uptime: f64,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok(uptime: f64) -> Self {
        Self {
            status: "OK".to_string(),
            uptime,
            timestamp: utc_timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_health_response_ok() {
        let response = HealthResponse::ok(1.5);

        // Verify status and uptime pass-through
        assert_eq!(response.status, "OK");
        assert_eq!(response.uptime, 1.5);

        // Verify timestamp is valid ISO 8601 format
        let parsed_time = DateTime::parse_from_rfc3339(&response.timestamp);
        assert!(
            parsed_time.is_ok(),
            "Timestamp should be valid RFC3339 format"
        );
    }

    #[test]
    fn test_uptime_serializes_as_number() {
        let response = HealthResponse::ok(0.25);
        let json = serde_json::to_value(&response).expect("Should serialize to JSON");

        assert!(json["uptime"].is_f64(), "Uptime should be a JSON number");
        assert_eq!(json["uptime"].as_f64(), Some(0.25));
    }
}
