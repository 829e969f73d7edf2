//! Client-side route table and the Axum router that serves it.
//!
//! | Path           | View        | Parameters |
//! |----------------|-------------|------------|
//! | `/`            | Home        | none       |
//! | `/products`    | Products    | none       |
//! | `/orders`      | Orders      | none       |
//! | `/orders/{id}` | OrderDetail | `id`       |
//!
//! The views also accept the form posts their pages submit
//! (`POST /products`, `POST /orders`, `POST /orders/{id}/items`,
//! `POST /orders/{id}/pay`).

use axum::routing::{get, post};
use axum::Router;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::views;

/// Characters escaped when an id is written into a single path segment.
/// Covers the URL path-segment set plus the HTML-significant `&` and `'`, so
/// an encoded path is also safe inside a quoted attribute.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A view the shell can render, with its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Products,
    Orders,
    OrderDetail { id: String },
}

impl Route {
    /// Path patterns, in table order.
    pub const PATTERNS: [&'static str; 4] = ["/", "/products", "/orders", "/orders/{id}"];

    /// Match a request path against the table. A trailing slash is ignored;
    /// `/orders/{id}` captures any single non-empty segment, percent-decoded.
    pub fn recognize(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.strip_prefix('/')?.split('/').collect()
        };

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["products"] => Some(Route::Products),
            ["orders"] => Some(Route::Orders),
            ["orders", id] if !id.is_empty() => {
                let id = percent_decode_str(id).decode_utf8().ok()?;
                Some(Route::OrderDetail { id: id.into_owned() })
            }
            _ => None,
        }
    }

    /// The path of this view. An `OrderDetail` id is percent-encoded as one
    /// segment.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Products => "/products".to_string(),
            Route::Orders => "/orders".to_string(),
            Route::OrderDetail { id } => {
                format!("/orders/{}", utf8_percent_encode(id, SEGMENT))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Products => "Products",
            Route::Orders => "Orders",
            Route::OrderDetail { .. } => "OrderDetail",
        }
    }
}

/// Build the view router. Handlers expect an `Extension<ApiClient>` layer.
pub fn router() -> Router {
    Router::new()
        .route("/", get(views::home::show))
        .route(
            "/products",
            get(views::products::list).post(views::products::create),
        )
        .route("/orders", get(views::orders::list).post(views::orders::create))
        .route("/orders/{id}", get(views::order_detail::show))
        .route("/orders/{id}/items", post(views::order_detail::add_item))
        .route("/orders/{id}/pay", post(views::order_detail::pay))
        .fallback(views::not_found)
}
