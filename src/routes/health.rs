use crate::clock::ServiceClock;
use crate::models::HealthResponse;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with its uptime
/// and a timestamp. Uptime is computed at request time from the shared
/// [`ServiceClock`] captured at startup.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("OK"), `uptime` in seconds as a
///     float, and `timestamp` in ISO 8601 format
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "OK",
///   "uptime": 42.375,
///   "timestamp": "2023-10-05T12:34:56.789012Z"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health with uptime", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(clock: web::Data<ServiceClock>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::ok(clock.uptime_secs()))
}

/// Registers the health check endpoint.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test, web::Data};
    use serde_json::Value;
    use std::time::Duration;

    #[actix_web::test]
    async fn test_health_endpoint() {
        // Set up test app with a freshly started clock
        let app = test::init_service(
            App::new()
                .app_data(Data::new(ServiceClock::start()))
                .configure(configure_routes),
        )
        .await;

        // Create test request
        let req = test::TestRequest::get().uri("/health").to_request();

        // Execute request
        let resp = test::call_service(&app, req).await;

        // Verify status code
        assert!(resp.status().is_success());

        // Verify response body
        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        let health_response: HealthResponse = serde_json::from_str(body_str).unwrap();

        assert_eq!(health_response.status, "OK");
        assert!(health_response.uptime >= 0.0);
        assert!(health_response.timestamp.ends_with('Z'));
    }

    #[actix_web::test]
    async fn test_uptime_increases_between_requests() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(ServiceClock::start()))
                .configure(configure_routes),
        )
        .await;

        // First request
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        let uptime1 = body["uptime"].as_f64().unwrap();

        // Wait a small amount
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Second request
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        let uptime2 = body["uptime"].as_f64().unwrap();

        assert!(
            uptime2 > uptime1,
            "Second uptime should be greater than first"
        );
    }
}
