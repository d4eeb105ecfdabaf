use actix_web::{App, HttpServer, web::Data};
use hello_world_api::clock::ServiceClock;
use hello_world_api::config;
use hello_world_api::openapi::ApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Hello World API Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Three JSON endpoints: greeting, health check, personalized greeting
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - Shared service clock for uptime reporting
///
/// # Endpoints
/// - Greeting: `GET /`
/// - Health check: `GET /health`
/// - Personalized greeting: `GET /hello/{name}`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `0.0.0.0` on the port from `PORT` (default 3000)
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let port = config::server_port();

    // Captured once, before the listener accepts any request
    let clock = ServiceClock::start();

    println!("Hello World API server running on port {}", port);
    println!("Visit: http://localhost:{}", port);

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(Data::new(clock))
            .configure(hello_world_api::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
