use crate::models::{GreetingResponse, PersonalizedGreeting};
use actix_web::{HttpResponse, Responder, get, web};

/// # Hello World Endpoint
///
/// Returns the canonical greeting along with the current timestamp and the
/// API version.
///
/// ## Response
///
/// - **200 OK**: Greeting payload
///   - Content-Type: `application/json`
///   - Body: [`GreetingResponse`] containing:
///     - `message`: The literal string "Hello World!"
///     - `timestamp`: ISO 8601 timestamp of the request
///     - `version`: API version string ("1.0.0")
///
/// ## Example Response
/// ```json
/// {
///   "message": "Hello World!",
///   "timestamp": "2023-10-05T12:34:56.789012Z",
///   "version": "1.0.0"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting with current timestamp", body = GreetingResponse)
    ),
    tag = "Greeting"
)]
#[get("/")]
pub async fn hello_world() -> impl Responder {
    HttpResponse::Ok().json(GreetingResponse::hello_world())
}

/// # Personalized Greeting Endpoint
///
/// Greets the caller by the name given in the path. The segment is
/// percent-decoded by the routing layer and echoed back verbatim; there is
/// no validation, length limit, or character-set restriction.
///
/// ## Response
///
/// - **200 OK**: Personalized greeting
///   - Body: JSON object with `message` ("Hello, {name}!") and `timestamp`
///
/// A request without the name segment (`GET /hello/`) matches no route and
/// gets the default 404.
///
/// ## Example Response
/// ```json
/// {
///   "message": "Hello, John!",
///   "timestamp": "2023-10-05T12:34:56.789012Z"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/hello/{name}",
    params(
        ("name" = String, Path, description = "Name to greet, echoed back verbatim")
    ),
    responses(
        (status = 200, description = "Personalized greeting", body = PersonalizedGreeting)
    ),
    tag = "Greeting"
)]
#[get("/hello/{name}")]
pub async fn personalized_greeting(name: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().json(PersonalizedGreeting::for_name(&name))
}

/// Registers the greeting endpoints at the root scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(hello_world).service(personalized_greeting);
}
