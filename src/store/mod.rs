//! Durable Store Module
//!
//! Persistence layer for the inventory, backed by an embedded ordered
//! key-value database (redb).
//!
//! ## Core Concepts
//! - **Source of truth**: Every product lives in the on-disk "inventory"
//!   table; the in-memory cache is a projection rebuilt from it at startup.
//! - **Encoding**: Key = product name (UTF-8), value = price as 8 big-endian
//!   IEEE-754 bytes.
//! - **Access pattern**: The database file is opened once for the startup
//!   scan and re-opened per write/delete call, one committed transaction per
//!   mutation. No handle is held across requests.

pub mod db;
