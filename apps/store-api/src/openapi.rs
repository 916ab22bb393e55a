//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Store API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clothing Store API",
        version = "1.0.0",
        description = "Product listing, demo seeding, and order capture over MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "", api = domain_store::ApiDoc)
    ),
    tags(
        (name = "Store", description = "Product browsing, demo seeding, and order capture")
    )
)]
pub struct ApiDoc;
