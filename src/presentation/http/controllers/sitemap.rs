use crate::application::dto::Sitemap;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    http::header,
    response::{IntoResponse, Response},
};

#[utoipa::path(
    get,
    path = "/sitemap.xml",
    responses(
        (status = 200, description = "sitemaps.org urlset: site root plus one entry per product.", content_type = "application/xml", body = String)
    ),
    tag = "System"
)]
pub async fn sitemap(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let sitemap = state
        .services
        .sitemap_queries
        .build_sitemap()
        .await
        .into_http()?;

    Ok(([(header::CONTENT_TYPE, Sitemap::CONTENT_TYPE)], sitemap.to_xml()).into_response())
}
