//! Home view.

use askama::Template;

use super::{render, ViewResult};
use crate::routes::Route;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    title: &'static str,
    products_path: String,
    orders_path: String,
}

pub async fn show() -> ViewResult {
    render(&HomeTemplate {
        title: "Home",
        products_path: Route::Products.path(),
        orders_path: Route::Orders.path(),
    })
}
