//! Order entity and lifecycle status.
//!
//! [`NewOrder`] is the creation payload (identifier optional, generated by
//! the service when absent); [`Order`] is the persisted entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::persistence::Entity;

/// Unique order identifier.
pub type OrderId = Uuid;

/// Order lifecycle status.
///
/// Discriminants are the stored representation. `Paid` orders cannot be
/// deleted, logically or physically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(i16)]
pub enum OrderStatus {
    #[default]
    Pending = 1,
    Processing = 2,
    Paid = 3,
    Cancelled = 4,
}

impl From<i16> for OrderStatus {
    fn from(v: i16) -> Self {
        match v {
            2 => OrderStatus::Processing,
            3 => OrderStatus::Paid,
            4 => OrderStatus::Cancelled,
            _ => OrderStatus::Pending,
        }
    }
}

/// A stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Monetary amount; strictly positive at creation time.
    pub value: Decimal,
    pub status: OrderStatus,
    /// `false` once the order has been logically deleted.
    pub active: bool,
}

impl Entity for Order {
    fn id(&self) -> OrderId {
        self.id
    }
}

/// Order creation payload.
///
/// An absent `id` means "assign one"; a present `id` is kept as given.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrder {
    #[serde(default)]
    pub id: Option<OrderId>,
    pub value: Decimal,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl NewOrder {
    /// Materialize the payload into a stored order under `id`.
    pub fn into_order(self, id: OrderId) -> Order {
        Order {
            id,
            value: self.value,
            status: self.status,
            active: self.active,
        }
    }
}
