//! Order lifecycle business rules.
//!
//! Every precondition violation surfaces as a typed [`OrderError`]; store
//! failures pass through unmodified. Concurrent updates to the same order
//! are last-write-wins at the store's commit boundary — there is no version
//! token on the entity.

use rust_decimal::Decimal;

use crate::error::OrderError;
use crate::models::{NewOrder, Order, OrderId, OrderStatus};
use crate::paging::{OrderFilter, PagedResult};
use crate::persistence::Repository;

/// Order Service - handles all order-related business logic
pub struct OrderService<R> {
    repository: R,
}

impl<R: Repository<Order>> OrderService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create a new order.
    ///
    /// Rejects non-positive values; assigns a fresh identifier when the
    /// payload carries none.
    pub async fn create_order(&self, order: NewOrder) -> Result<OrderId, OrderError> {
        if order.value <= Decimal::ZERO {
            tracing::warn!(value = %order.value, "rejected order with non-positive value");
            return Err(OrderError::business(
                "order value must be greater than zero",
            ));
        }

        let id = order.id.unwrap_or_else(OrderId::new_v4);
        let order = order.into_order(id);

        let id = self.repository.add(order).await?;
        tracing::info!(order_id = %id, "order created");
        Ok(id)
    }

    /// Fetch a single order; absence is a not-found error.
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| OrderError::not_found("order not found"))
    }

    /// List one page of orders, echoing the filter's page coordinates.
    pub async fn list_orders(&self, filter: OrderFilter) -> Result<PagedResult<Order>, OrderError> {
        let (items, total_count) = self
            .repository
            .get_paged(filter.page_number, filter.page_size, true)
            .await?;

        Ok(PagedResult::new(
            items,
            total_count,
            filter.page_number,
            filter.page_size,
        ))
    }

    /// Fully replace an existing order, echoing the input back.
    ///
    /// Unlike the read path, a missing order is a business error here. The
    /// positive-value invariant is enforced on update as well as create.
    pub async fn update_order(&self, order: Order) -> Result<Order, OrderError> {
        if order.value <= Decimal::ZERO {
            return Err(OrderError::business(
                "order value must be greater than zero",
            ));
        }

        let exists = self.repository.get_by_id(order.id).await?.is_some();
        if !exists {
            return Err(OrderError::business("order not found"));
        }

        self.repository.update(order.clone());
        self.repository.save_changes().await?;
        tracing::info!(order_id = %order.id, "order replaced");

        Ok(order)
    }

    /// Delete an order, logically (`active = false`) or physically.
    ///
    /// Paid orders are refused on both paths.
    pub async fn delete_order(&self, id: OrderId, logical: bool) -> Result<bool, OrderError> {
        let mut order = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| OrderError::business("order not found"))?;

        if order.status == OrderStatus::Paid {
            tracing::warn!(order_id = %id, "refused deletion of a Paid order");
            return Err(OrderError::business("cannot delete an order with Paid status"));
        }

        if logical {
            order.active = false;
            self.repository.update(order);
        } else {
            self.repository.remove(order);
        }
        self.repository.save_changes().await?;
        tracing::info!(order_id = %id, logical, "order deleted");

        Ok(true)
    }
}
