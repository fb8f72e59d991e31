// src/presentation/http/controllers/contact.rs
use crate::application::{commands::contact::SubmitContactCommand, dto::ContactReceiptDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Form, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

/// Fields posted by the storefront contact form.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: String,
    /// Product slug when the inquiry is sent from a product page.
    #[serde(default)]
    pub product: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/contact",
    request_body(content = ContactRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 202, description = "Submission relayed.", body = ContactReceiptDto),
        (status = 400, description = "Missing or malformed field.", body = ErrorResponse),
        (status = 404, description = "Inquiry names a product that does not exist.", body = ErrorResponse),
        (status = 429, description = "Too many submissions from this client."),
        (status = 502, description = "Form-handling service rejected or could not be reached.", body = ErrorResponse)
    ),
    tag = "Contact"
)]
pub async fn submit_contact(
    Extension(state): Extension<HttpState>,
    Form(payload): Form<ContactRequest>,
) -> HttpResult<(StatusCode, Json<ContactReceiptDto>)> {
    let command = SubmitContactCommand {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        message: payload.message,
        product: payload.product,
    };

    state
        .services
        .contact_commands
        .submit(command)
        .await
        .into_http()?;

    Ok((StatusCode::ACCEPTED, Json(ContactReceiptDto::accepted())))
}
