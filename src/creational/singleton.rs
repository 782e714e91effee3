// Pattern: Singleton
// One lazily created database handle for the whole process vs. a new one per call.

use serde::Serialize;
use std::sync::OnceLock;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionConfig {
    pub client: String,
    pub filename: String,
    pub use_null_as_default: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            client: "sqlite3".to_string(),
            filename: "./database.db".to_string(),
            use_null_as_default: true,
        }
    }
}

/// A database handle. Every construction gets a fresh `id`, which makes
/// "same instance or not" observable.
#[derive(Debug, Serialize)]
pub struct Database {
    id: Uuid,
    config: ConnectionConfig,
}

impl Database {
    fn connect(config: ConnectionConfig) -> Self {
        let db = Self {
            id: Uuid::new_v4(),
            config,
        };
        tracing::debug!(id = %db.id, filename = %db.config.filename, "database handle created");
        db
    }

    /// The process-wide instance, created on first use.
    pub fn instance() -> &'static Database {
        static INSTANCE: OnceLock<Database> = OnceLock::new();
        INSTANCE.get_or_init(|| Database::connect(ConnectionConfig::default()))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }
}

// ============================================================================
// Without the pattern
// ============================================================================

/// Every call opens a brand new handle.
pub fn create_connection() -> Database {
    Database::connect(ConnectionConfig::default())
}
