//! Inventory Server Library
//!
//! This library crate defines the core modules that make up the inventory
//! management server. It serves as the foundation for the binary executable
//! (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`store`**: The durable persistence layer. Wraps an embedded ordered
//!   key-value database file holding the "inventory" table, the source of
//!   truth for all product data.
//! - **`inventory`**: The in-memory state layer and HTTP API. Holds the
//!   cache mirroring the store, the write lock serializing every mutation,
//!   and the request handlers for the Axum web server.
//! - **`view`**: The presentation layer. Typed page variants rendered to
//!   HTML responses.

pub mod inventory;
pub mod store;
pub mod view;
