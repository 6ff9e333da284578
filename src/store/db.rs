use std::path::{Path, PathBuf};

use redb::{Database, ReadableTable, TableDefinition};
use thiserror::Error;

/// The single table holding all inventory entries: name → encoded price.
const INVENTORY: TableDefinition<'static, &'static str, &'static [u8]> =
    TableDefinition::new("inventory");

/// Durable store error types, one variant per failure mode.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database open failed: {0}")]
    Open(#[from] redb::DatabaseError),

    #[error("transaction failed: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("table open failed: {0}")]
    Table(#[from] redb::TableError),

    #[error("storage read/write failed: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("commit failed: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("malformed price for '{name}': expected 8 bytes, got {len}")]
    MalformedPrice { name: String, len: usize },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Handle to the on-disk inventory database.
///
/// Holds only the file path; each operation opens the database, runs a
/// single transaction and closes it again, so no file handle outlives the
/// call that needed it.
pub struct InventoryDb {
    path: PathBuf,
}

impl InventoryDb {
    /// Open or create the database file and bootstrap the inventory table.
    ///
    /// This is the one fatal failure point of process startup: a file that
    /// cannot be created or read rejects the whole deployment.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let db = Database::create(&path)?;
        let txn = db.begin_write()?;
        txn.open_table(INVENTORY)?;
        txn.commit()?;

        tracing::info!("inventory database opened: {}", path.display());
        Ok(Self { path })
    }

    /// Load every stored entry in key order.
    ///
    /// Runs inside a write transaction so the table is created if a fresh
    /// file has never seen one. Used once, at startup.
    pub fn load_all(&self) -> Result<Vec<(String, f64)>> {
        let db = Database::create(&self.path)?;
        let txn = db.begin_write()?;

        let mut entries = Vec::new();
        {
            let table = txn.open_table(INVENTORY)?;
            for item in table.iter()? {
                let (key, value) = item?;
                let name = key.value().to_string();
                let price = decode_price(&name, value.value())?;
                entries.push((name, price));
            }
        }
        txn.commit()?;

        tracing::debug!(count = entries.len(), "store scan complete");
        Ok(entries)
    }

    /// Write or overwrite one entry in a single committed transaction.
    pub fn put(&self, name: &str, price: f64) -> Result<()> {
        let db = Database::create(&self.path)?;
        let txn = db.begin_write()?;
        {
            let mut table = txn.open_table(INVENTORY)?;
            table.insert(name, encode_price(price).as_slice())?;
        }
        txn.commit()?;

        tracing::debug!(name, price, "store write committed");
        Ok(())
    }

    /// Remove one entry in a single committed transaction.
    ///
    /// Removing a key that is not present is not an error; existence is the
    /// caller's concern.
    pub fn delete(&self, name: &str) -> Result<()> {
        let db = Database::create(&self.path)?;
        let txn = db.begin_write()?;
        {
            let mut table = txn.open_table(INVENTORY)?;
            table.remove(name)?;
        }
        txn.commit()?;

        tracing::debug!(name, "store delete committed");
        Ok(())
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Encode a price as 8 big-endian IEEE-754 bytes.
pub fn encode_price(price: f64) -> [u8; 8] {
    price.to_be_bytes()
}

/// Decode a stored value back into a price. Anything that is not exactly
/// 8 bytes is corruption.
pub fn decode_price(name: &str, raw: &[u8]) -> Result<f64> {
    let bytes: [u8; 8] = raw.try_into().map_err(|_| StoreError::MalformedPrice {
        name: name.to_string(),
        len: raw.len(),
    })?;
    Ok(f64::from_be_bytes(bytes))
}
