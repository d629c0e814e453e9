//! Persistent preferences using redb.
//!
//! The page persists a single flag (the theme), but the store is a plain
//! string key-value table so further preferences need no schema change.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition};

use crate::error::FolioResult;

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// File name of the preference database inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.redb";

/// A key-value slot store for user preferences.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `None` if never written.
    fn get(&self, key: &str) -> FolioResult<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> FolioResult<()>;
}

/// Preference store backed by a redb database file
#[derive(Clone)]
pub struct Preferences {
    db: Arc<RwLock<Database>>,
}

impl Preferences {
    /// Open (or create) the preference database at the given path.
    ///
    /// This will:
    /// - Create the parent directory if it doesn't exist
    /// - Initialize the database file
    /// - Create the preferences table
    pub fn new(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "Opened preference database");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open the preference database inside a data directory.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> FolioResult<Self> {
        Self::new(data_dir.as_ref().join(PREFERENCES_FILE))
    }
}

impl PreferenceStore for Preferences {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> FolioResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-memory preference store.
///
/// Used by tests, and by the app when the database cannot be opened.
#[derive(Clone, Default)]
pub struct MemoryPreferences {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> FolioResult<()> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> FolioResult<()> {
        (**self).set(key, value)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Arc<S> {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> FolioResult<()> {
        (**self).set(key, value)
    }
}
