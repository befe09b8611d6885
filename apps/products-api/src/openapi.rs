//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "In-memory product CRUD over REST",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/produtos", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Produtos", description = "Product CRUD endpoints")
    )
)]
pub struct ApiDoc;
