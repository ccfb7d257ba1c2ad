//! Repository traits for data access abstraction
//!
//! The generic [`Repository`] contract gives every entity type CRUD plus
//! offset pagination over a backing store, and keeps the service layer
//! testable against in-memory implementations.

use async_trait::async_trait;

use crate::error::PersistenceError;
use crate::models::OrderId;

/// A storable entity with a unique identifier.
///
/// The explicit accessor replaces runtime introspection: a type without an
/// identifier cannot implement the trait, so `add` can always report the id
/// it persisted.
pub trait Entity: Send + Sync {
    fn id(&self) -> OrderId;
}

/// Generic CRUD + pagination over a homogeneous collection of `T`.
///
/// `update` and `remove` only mark work; [`Repository::save_changes`]
/// commits all pending marks atomically as a single unit. `add` persists
/// immediately and returns the assigned identifier. Absence on `get_by_id`
/// is a normal result, not a failure.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Fetch a single entity, `None` when absent.
    async fn get_by_id(&self, id: OrderId) -> Result<Option<T>, PersistenceError>;

    /// Fetch every entity in the store's default order.
    async fn get_all(&self) -> Result<Vec<T>, PersistenceError>;

    /// Persist a new entity and return its identifier.
    async fn add(&self, entity: T) -> Result<OrderId, PersistenceError>;

    /// Mark a full replace of the entity matched by identifier. Existence is
    /// not checked here; callers verify it first.
    fn update(&self, entity: T);

    /// Mark the entity for physical deletion.
    fn remove(&self, entity: T);

    /// Commit all pending update/remove marks, returning affected rows.
    async fn save_changes(&self) -> Result<u64, PersistenceError>;

    /// Return the slice `[(page_number - 1) * page_size, page_number * page_size)`
    /// of a stable ordering, plus the total unfiltered count.
    async fn get_paged(
        &self,
        page_number: u32,
        page_size: u32,
        ascending: bool,
    ) -> Result<(Vec<T>, u64), PersistenceError>;
}
