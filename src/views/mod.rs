//! Server-rendered views for the UI shell.
//!
//! Pages are askama templates under `templates/`, all extending `base.html`.
//!
//! - `home`: landing page
//! - `products`: product list and create form
//! - `orders`: order list and create form
//! - `order_detail`: a single order, add-item form and payment

pub mod home;
pub mod order_detail;
pub mod orders;
pub mod products;

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::api::ApiError;

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    title: &'a str,
    message: &'a str,
}

/// A failure surfaced to the browser.
///
/// Non-2xx backend responses keep their status code; transport and decode
/// failures become 502 Bad Gateway, rendering failures 500.
#[derive(Error, Debug)]
pub enum ViewError {
    #[error(transparent)]
    Backend(#[from] ApiError),

    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ViewError::Backend(err @ ApiError::Status { status, .. }) => {
                warn!("Backend rejected request: {}", err);
                (*status, err.message())
            }
            ViewError::Backend(err) => {
                error!("Backend call failed: {}", err);
                (StatusCode::BAD_GATEWAY, err.message())
            }
            ViewError::Render(err) => {
                error!("Failed to render view: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        error_page(status, "Error", &message)
    }
}

pub type ViewResult = Result<Html<String>, ViewError>;

/// Render a page template into an HTML response body.
pub fn render<T: Template>(template: &T) -> ViewResult {
    Ok(Html(template.render()?))
}

fn error_page(status: StatusCode, title: &str, message: &str) -> Response {
    match (ErrorTemplate { title, message }).render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            error!("Failed to render error page: {}", err);
            (status, message.to_string()).into_response()
        }
    }
}

pub async fn not_found() -> Response {
    error_page(
        StatusCode::NOT_FOUND,
        "Not Found",
        "No view matches this path.",
    )
}
