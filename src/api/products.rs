//! Product endpoints.
//!
//! GET  /products - List all products
//! POST /products - Create a product

use super::{ApiClient, Result};
use crate::models::{NewProduct, Product};

pub struct ProductsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductsApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Product>> {
        self.client.send(self.client.get(&["products"])).await
    }

    pub async fn create(&self, product: &NewProduct) -> Result<Product> {
        self.client
            .send(self.client.post(&["products"]).json(product))
            .await
    }
}
