/// # Greeting Responses
///
/// Payloads for the root and personalized greeting endpoints: a greeting
/// message with the current timestamp, plus the API version on the root
/// endpoint.
pub mod greeting;

/// # Health Status Response
///
/// Represents the operational status of the service with its uptime and a
/// timestamp. Used as the response format for the health check endpoint.
pub mod health;

pub use greeting::{GreetingResponse, PersonalizedGreeting};
pub use health::HealthResponse;
