use actix_web::web;

/// # Greeting Endpoints
///
/// The root Hello World greeting and the personalized `/hello/{name}`
/// greeting. Both return a JSON payload with the current timestamp.
///
/// ## Example Response
///
/// ```json
/// {
///   "message": "Hello World!",
///   "timestamp": "2023-10-05T12:34:56.789012Z",
///   "version": "1.0.0"
/// }
/// ```
pub mod greeting;

/// # Health Check Endpoint
///
/// Returns the service status with uptime in seconds and a timestamp.
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
pub mod health;

/// # API Route Configuration
///
/// Registers all endpoints with the Actix-web service configuration. Routes
/// live at the root scope; any other path gets the default 404.
///
/// ## Configured Routes
///
/// ```text
/// GET /             - Hello World greeting
/// GET /health       - Service health and uptime
/// GET /hello/{name} - Personalized greeting
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(greeting::configure_routes)
        .configure(health::configure_routes);
}
