// src/presentation/http/openapi.rs
use crate::application::dto::{
    ContactReceiptDto, ProductDetailDto, ProductListDto, ProductSummaryDto,
};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::products::list_products,
        crate::presentation::http::controllers::products::get_product_by_slug,
        crate::presentation::http::controllers::products::get_product_by_id,
        crate::presentation::http::controllers::contact::submit_contact,
        crate::presentation::http::controllers::sitemap::sitemap,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ProductSummaryDto,
            ProductDetailDto,
            ProductListDto,
            ContactReceiptDto,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::contact::ContactRequest
        )
    ),
    tags(
        (name = "Products", description = "Catalog listing and slug/id lookup"),
        (name = "Contact", description = "Contact form relay"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Lumezza Catalog API",
        description = "Product catalog, sitemap and contact relay for the Lumezza storefront",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }

        if servers.is_empty() {
            servers.push(Server::new("http://localhost:8080"));
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
