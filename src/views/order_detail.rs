//! OrderDetail view. The `id` route parameter is forwarded to the backend as
//! given; links back to the view re-encode it as a single path segment.
//!
//! GET  /orders/:id       - Show the order
//! POST /orders/:id/items - Add an item from the form, then back to the order
//! POST /orders/:id/pay   - Pay and show the receipt

use askama::Template;
use axum::extract::Path;
use axum::response::Redirect;
use axum::{Extension, Form};
use serde::Deserialize;
use tracing::info;

use super::{render, ViewError, ViewResult};
use crate::api::ApiClient;
use crate::models::{Order, OrderLine, PaymentReceipt};
use crate::routes::Route;

#[derive(Template)]
#[template(path = "order_detail.html")]
struct OrderDetailTemplate {
    title: String,
    detail: String,
    order: Order,
}

#[derive(Template)]
#[template(path = "receipt.html")]
struct ReceiptTemplate {
    title: &'static str,
    detail: String,
    receipt: PaymentReceipt,
}

#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    pub product_id: i64,
    pub quantity: i64,
}

pub async fn show(Extension(api): Extension<ApiClient>, Path(id): Path<String>) -> ViewResult {
    let order = api.orders().get_by_id(&id).await?;
    render(&OrderDetailTemplate {
        title: format!("Order #{}", order.id),
        detail: Route::OrderDetail { id }.path(),
        order,
    })
}

pub async fn add_item(
    Extension(api): Extension<ApiClient>,
    Path(id): Path<String>,
    Form(form): Form<AddItemForm>,
) -> Result<Redirect, ViewError> {
    let item = api
        .orders()
        .add_item(
            &id,
            &OrderLine {
                product_id: form.product_id,
                quantity: form.quantity,
            },
        )
        .await?;

    info!(
        "Added product {} x{} to order {}",
        item.product_id, item.quantity, id
    );
    Ok(Redirect::to(&Route::OrderDetail { id }.path()))
}

pub async fn pay(Extension(api): Extension<ApiClient>, Path(id): Path<String>) -> ViewResult {
    let receipt = api.orders().pay(&id).await?;
    info!(
        "Order {} paid, reference {}",
        receipt.order.id, receipt.payment_reference
    );
    render(&ReceiptTemplate {
        title: "Payment",
        detail: Route::OrderDetail { id }.path(),
        receipt,
    })
}
