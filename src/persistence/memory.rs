//! In-memory repository, the store client used by tests and embedded setups.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::PersistenceError;
use crate::models::OrderId;

use super::repository::{Entity, Repository};

enum Pending<T> {
    Update(T),
    Remove(OrderId),
}

/// Vec-backed repository with unit-of-work semantics.
///
/// Insertion order is the stable default ordering seen by `get_paged`.
pub struct MemoryRepository<T> {
    rows: Mutex<Vec<T>>,
    pending: Mutex<Vec<Pending<T>>>,
}

impl<T> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            pending: Mutex::new(Vec::new()),
        }
    }
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Repository<T> for MemoryRepository<T>
where
    T: Entity + Clone + 'static,
{
    async fn get_by_id(&self, id: OrderId) -> Result<Option<T>, PersistenceError> {
        let rows = self.rows.lock().expect("rows lock poisoned");
        Ok(rows.iter().find(|e| e.id() == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<T>, PersistenceError> {
        let rows = self.rows.lock().expect("rows lock poisoned");
        Ok(rows.clone())
    }

    async fn add(&self, entity: T) -> Result<OrderId, PersistenceError> {
        let mut rows = self.rows.lock().expect("rows lock poisoned");
        let id = entity.id();
        if rows.iter().any(|e| e.id() == id) {
            return Err(PersistenceError::Constraint(format!(
                "duplicate identifier {id}"
            )));
        }
        rows.push(entity);
        Ok(id)
    }

    fn update(&self, entity: T) {
        self.pending
            .lock()
            .expect("pending lock poisoned")
            .push(Pending::Update(entity));
    }

    fn remove(&self, entity: T) {
        self.pending
            .lock()
            .expect("pending lock poisoned")
            .push(Pending::Remove(entity.id()));
    }

    async fn save_changes(&self) -> Result<u64, PersistenceError> {
        let marks: Vec<Pending<T>> = {
            let mut pending = self.pending.lock().expect("pending lock poisoned");
            pending.drain(..).collect()
        };

        // Single rows lock for the whole batch, so the commit is one unit.
        let mut rows = self.rows.lock().expect("rows lock poisoned");
        let mut affected = 0u64;
        for mark in marks {
            match mark {
                Pending::Update(entity) => {
                    if let Some(slot) = rows.iter_mut().find(|e| e.id() == entity.id()) {
                        *slot = entity;
                        affected += 1;
                    }
                }
                Pending::Remove(id) => {
                    let before = rows.len();
                    rows.retain(|e| e.id() != id);
                    affected += (before - rows.len()) as u64;
                }
            }
        }
        Ok(affected)
    }

    async fn get_paged(
        &self,
        page_number: u32,
        page_size: u32,
        ascending: bool,
    ) -> Result<(Vec<T>, u64), PersistenceError> {
        let rows = self.rows.lock().expect("rows lock poisoned");
        let total = rows.len() as u64;

        let start = (page_number.max(1) as usize - 1) * page_size as usize;
        let page: Vec<T> = if ascending {
            rows.iter()
                .skip(start)
                .take(page_size as usize)
                .cloned()
                .collect()
        } else {
            rows.iter()
                .rev()
                .skip(start)
                .take(page_size as usize)
                .cloned()
                .collect()
        };

        Ok((page, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Order, OrderStatus};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn order(value: i64) -> Order {
        Order {
            id: Uuid::new_v4(),
            value: Decimal::from(value),
            status: OrderStatus::Pending,
            active: true,
        }
    }

    #[tokio::test]
    async fn test_add_then_get_by_id() {
        let repo = MemoryRepository::new();
        let o = order(100);
        let id = repo.add(o.clone()).await.expect("add should succeed");

        assert_eq!(id, o.id);
        let found = repo.get_by_id(id).await.expect("get should succeed");
        assert_eq!(found, Some(o));
    }

    #[tokio::test]
    async fn test_add_duplicate_id_is_constraint_violation() {
        let repo = MemoryRepository::new();
        let o = order(100);
        repo.add(o.clone()).await.expect("first add should succeed");

        let err = repo.add(o).await.expect_err("second add must fail");
        assert!(matches!(err, PersistenceError::Constraint(_)));
    }

    #[tokio::test]
    async fn test_update_is_deferred_until_save_changes() {
        let repo = MemoryRepository::new();
        let mut o = order(100);
        repo.add(o.clone()).await.expect("add should succeed");

        o.value = Decimal::from(500);
        repo.update(o.clone());

        let stored = repo.get_by_id(o.id).await.expect("get").expect("present");
        assert_eq!(stored.value, Decimal::from(100), "not applied before save");

        let affected = repo.save_changes().await.expect("save");
        assert_eq!(affected, 1);

        let stored = repo.get_by_id(o.id).await.expect("get").expect("present");
        assert_eq!(stored.value, Decimal::from(500));
    }

    #[tokio::test]
    async fn test_remove_then_save_deletes_row() {
        let repo = MemoryRepository::new();
        let o = order(100);
        repo.add(o.clone()).await.expect("add should succeed");

        repo.remove(o.clone());
        let affected = repo.save_changes().await.expect("save");
        assert_eq!(affected, 1);

        assert_eq!(repo.get_by_id(o.id).await.expect("get"), None);
    }

    #[tokio::test]
    async fn test_save_changes_with_no_marks_is_zero() {
        let repo = MemoryRepository::<Order>::new();
        assert_eq!(repo.save_changes().await.expect("save"), 0);
    }

    #[tokio::test]
    async fn test_get_paged_slices_and_counts() {
        let repo = MemoryRepository::new();
        for i in 1..=25 {
            repo.add(order(i)).await.expect("add should succeed");
        }

        let (items, total) = repo.get_paged(2, 10, true).await.expect("paged");
        assert_eq!(items.len(), 10);
        assert_eq!(total, 25);
        assert_eq!(items[0].value, Decimal::from(11));

        let (tail, total) = repo.get_paged(3, 10, true).await.expect("paged");
        assert_eq!(tail.len(), 5);
        assert_eq!(total, 25);
    }

    #[tokio::test]
    async fn test_get_paged_descending_reverses_order() {
        let repo = MemoryRepository::new();
        for i in 1..=5 {
            repo.add(order(i)).await.expect("add should succeed");
        }

        let (items, _) = repo.get_paged(1, 3, false).await.expect("paged");
        let values: Vec<Decimal> = items.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![5.into(), 4.into(), 3.into()]);
    }

    #[tokio::test]
    async fn test_get_paged_past_the_end_is_empty() {
        let repo = MemoryRepository::new();
        repo.add(order(1)).await.expect("add should succeed");

        let (items, total) = repo.get_paged(4, 10, true).await.expect("paged");
        assert!(items.is_empty());
        assert_eq!(total, 1);
    }
}
