// Persistence layer for the orders store
pub mod db;
pub mod memory;
pub mod orders;
pub mod repository;
pub mod schema;

pub use db::Database;
pub use memory::MemoryRepository;
pub use orders::PgOrderRepository;
pub use repository::{Entity, Repository};
pub use schema::init_schema;
