//! Order endpoints.
//!
//! GET  /orders           - List orders
//! POST /orders           - Create an order with its initial items
//! GET  /orders/:id       - Retrieve an order by ID
//! POST /orders/:id/items - Attach another item to an unpaid order
//! POST /orders/:id/pay   - Mark an order paid

use std::fmt::Display;

use super::{ApiClient, Result};
use crate::models::{NewOrder, Order, OrderItem, OrderLine, PaymentReceipt};

pub struct OrdersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> OrdersApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Order>> {
        self.client.send(self.client.get(&["orders"])).await
    }

    pub async fn create(&self, order: &NewOrder) -> Result<Order> {
        self.client
            .send(self.client.post(&["orders"]).json(order))
            .await
    }

    pub async fn get_by_id(&self, id: impl Display) -> Result<Order> {
        let id = id.to_string();
        self.client.send(self.client.get(&["orders", id.as_str()])).await
    }

    /// The backend answers with the created line entry, not the whole order.
    pub async fn add_item(&self, order_id: impl Display, item: &OrderLine) -> Result<OrderItem> {
        let order_id = order_id.to_string();
        self.client
            .send(self.client.post(&["orders", order_id.as_str(), "items"]).json(item))
            .await
    }

    /// Sent without a body.
    pub async fn pay(&self, order_id: impl Display) -> Result<PaymentReceipt> {
        let order_id = order_id.to_string();
        self.client
            .send(self.client.post(&["orders", order_id.as_str(), "pay"]))
            .await
    }
}
