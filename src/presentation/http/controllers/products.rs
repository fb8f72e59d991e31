// src/presentation/http/controllers/products.rs
use crate::application::{
    dto::{ProductDetailDto, ProductListDto},
    queries::products::{GetProductByIdQuery, GetProductBySlugQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/products",
    responses(
        (status = 200, description = "All products in catalog order.", body = ProductListDto)
    ),
    tag = "Products"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ProductListDto>> {
    state
        .services
        .product_queries
        .list_products()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products/by-slug/{slug}",
    params(("slug" = String, Path, description = "Product slug, matched verbatim")),
    responses(
        (status = 200, description = "First product whose title produces this slug.", body = ProductDetailDto),
        (status = 404, description = "No product produces this slug.", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ProductDetailDto>> {
    state
        .services
        .product_queries
        .get_product_by_slug(GetProductBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Catalog identifier")),
    responses(
        (status = 200, description = "Product with this identifier.", body = ProductDetailDto),
        (status = 400, description = "Identifier is not an integer.", body = ErrorResponse),
        (status = 404, description = "No product carries this identifier.", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product_by_id(
    Extension(state): Extension<HttpState>,
    Path(raw_id): Path<String>,
) -> HttpResult<Json<ProductDetailDto>> {
    let id = raw_id
        .parse::<i64>()
        .map_err(|_| HttpError::bad_request(format!("invalid product id: {raw_id}")))?;

    state
        .services
        .product_queries
        .get_product_by_id(GetProductByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}
