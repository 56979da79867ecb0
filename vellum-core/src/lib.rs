//! Vellum Core - Schema Registry Data Types
//!
//! Pure data structures with no behavior. The DSL parser and the rest of
//! the registry (storage, API, UI forms) all depend on this crate; it
//! contains ONLY data types - no parsing, no business logic.

pub mod diagnostic;
pub mod schema;

pub use diagnostic::*;
pub use schema::*;
