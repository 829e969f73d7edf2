//! Products view.
//!
//! GET  /products - List the catalog with a create form
//! POST /products - Create a product from the form, then back to the list

use askama::Template;
use axum::response::Redirect;
use axum::{Extension, Form};
use serde::Deserialize;
use tracing::info;

use super::{render, ViewError, ViewResult};
use crate::api::ApiClient;
use crate::models::{NewProduct, Product};
use crate::routes::Route;

#[derive(Template)]
#[template(path = "products.html")]
struct ProductsTemplate {
    title: &'static str,
    action: String,
    products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductForm {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

pub async fn list(Extension(api): Extension<ApiClient>) -> ViewResult {
    let products = api.products().get_all().await?;
    render(&ProductsTemplate {
        title: "Products",
        action: Route::Products.path(),
        products,
    })
}

pub async fn create(
    Extension(api): Extension<ApiClient>,
    Form(form): Form<CreateProductForm>,
) -> Result<Redirect, ViewError> {
    let product = api
        .products()
        .create(&NewProduct {
            name: form.name,
            price: form.price,
            stock: form.stock,
        })
        .await?;

    info!("Product {} created: {}", product.id, product.name);
    Ok(Redirect::to(&Route::Products.path()))
}
