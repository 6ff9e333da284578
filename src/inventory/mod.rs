//! Inventory Service Module
//!
//! The in-memory state layer and HTTP API of the server.
//!
//! ## Core Concepts
//! - **Cache**: A shared map mirroring the durable store, rebuilt from a
//!   full scan at startup. Read requests are answered from it without
//!   touching disk.
//! - **Write lock**: One exclusive lock serializes every write-path
//!   operation process-wide; the store commit and the cache mutation
//!   complete as a unit before the lock is released.
//! - **Access**: `InventoryService` is constructed once in `main` and handed
//!   to every handler through an axum `Extension`.
//!
//! ## Submodules
//! - **`service`**: The cache + lock + store coordination logic.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Domain types (`Product`, `Dollars`) and the error taxonomy.

pub mod handlers;
pub mod service;
pub mod types;
