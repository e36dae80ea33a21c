//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Content API",
        version = "0.1.0",
        description = "Multilingual content and catalog API: products, FAQs, pages, languages, and media",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_catalog::ApiDoc),
        (path = "/api/faqs", api = domain_faqs::ApiDoc),
        (path = "/api/pages", api = domain_pages::ApiDoc),
        (path = "/api/languages", api = domain_languages::ApiDoc),
        (path = "/api/media", api = domain_media::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Multilingual product catalog endpoints"),
        (name = "FAQs", description = "Multilingual FAQ endpoints"),
        (name = "Pages", description = "Static page registry endpoints"),
        (name = "Languages", description = "Language reference data endpoints"),
        (name = "Media", description = "Media library endpoints")
    )
)]
pub struct ApiDoc;
