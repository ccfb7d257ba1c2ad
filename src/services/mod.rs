//! Service layer
//!
//! Business rules extracted from the transport boundary. The boundary stays
//! a thin adapter that translates typed results and errors into responses.

pub mod order;

pub use order::OrderService;
