//! Orders Core - order lifecycle and access layer
//!
//! The business-rule service governing order creation, mutation, and
//! deletion, over a generic paginated repository. The HTTP boundary, token
//! issuance, and response mapping live outside this crate: it consumes an
//! authenticated caller and a store client, and hands back typed results
//! and errors.
//!
//! # Modules
//!
//! - [`models`] - Order entity and lifecycle status
//! - [`paging`] - pagination filter and paged result envelope
//! - [`error`] - business / not-found / persistence error taxonomy
//! - [`persistence`] - generic `Repository<T>` plus memory and Postgres stores
//! - [`services`] - OrderService business rules
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod paging;
pub mod persistence;
pub mod services;

// Convenient re-exports at crate root
pub use error::{OrderError, PersistenceError};
pub use models::{NewOrder, Order, OrderId, OrderStatus};
pub use paging::{OrderFilter, PagedResult};
pub use persistence::{Database, Entity, MemoryRepository, PgOrderRepository, Repository};
pub use services::OrderService;
