//! Orders view.
//!
//! GET  /orders - List orders with a create form
//! POST /orders - Create an order with its first item, then open it

use askama::Template;
use axum::response::Redirect;
use axum::{Extension, Form};
use serde::Deserialize;
use tracing::info;

use super::{render, ViewError, ViewResult};
use crate::api::ApiClient;
use crate::models::{NewOrder, Order, OrderLine};
use crate::routes::Route;

struct OrderRow {
    href: String,
    order: Order,
}

#[derive(Template)]
#[template(path = "orders.html")]
struct OrdersTemplate {
    title: &'static str,
    action: String,
    rows: Vec<OrderRow>,
}

/// The backend refuses orders without items, so the form carries the first one.
#[derive(Debug, Deserialize)]
pub struct CreateOrderForm {
    pub name: String,
    pub email: String,
    pub product_id: i64,
    pub quantity: i64,
}

pub async fn list(Extension(api): Extension<ApiClient>) -> ViewResult {
    let rows = api
        .orders()
        .get_all()
        .await?
        .into_iter()
        .map(|order| OrderRow {
            href: Route::OrderDetail {
                id: order.id.to_string(),
            }
            .path(),
            order,
        })
        .collect();

    render(&OrdersTemplate {
        title: "Orders",
        action: Route::Orders.path(),
        rows,
    })
}

pub async fn create(
    Extension(api): Extension<ApiClient>,
    Form(form): Form<CreateOrderForm>,
) -> Result<Redirect, ViewError> {
    let order = api
        .orders()
        .create(&NewOrder {
            name: form.name,
            email: form.email,
            items: vec![OrderLine {
                product_id: form.product_id,
                quantity: form.quantity,
            }],
        })
        .await?;

    info!("Order {} created for {}", order.id, order.email);
    let detail = Route::OrderDetail {
        id: order.id.to_string(),
    };
    Ok(Redirect::to(&detail.path()))
}
