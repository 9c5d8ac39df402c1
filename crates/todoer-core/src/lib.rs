//! Core storage engine for the todoer service.
//!
//! Maintains two entity tables (todo lists and todos) and a list-to-todo
//! membership index, with engine-assigned identifiers and validation on every
//! mutation. All operations are synchronous and in-memory; callers embedding
//! the engine in a concurrent server are responsible for serializing access.

#![deny(unsafe_code)]

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::{MemoryStore, TodoStore};
pub use types::{Todo, TodoList};
