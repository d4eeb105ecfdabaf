use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros. This documentation serves as the source of truth for both API
/// consumers and automated documentation generators.
///
/// # Endpoints
/// - Greeting: `GET /`
/// - Health Check: `GET /health`
/// - Personalized Greeting: `GET /hello/{name}`
///
/// # Schemas
/// - `GreetingResponse`: Root greeting payload
/// - `PersonalizedGreeting`: Parameterized greeting payload
/// - `HealthResponse`: Service status payload
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any
/// changes to the API surface should be reflected here first to maintain
/// documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::greeting::hello_world,
        crate::routes::greeting::personalized_greeting,
        crate::routes::health::health,
    ),
    components(
        schemas(
            crate::models::greeting::GreetingResponse,
            crate::models::greeting::PersonalizedGreeting,
            crate::models::health::HealthResponse
        )
    ),
    tags(
        (name = "Greeting", description = "Hello World greeting endpoints"),
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "Minimal Hello World API with greeting and health endpoints",
        title = "Hello World API",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;
