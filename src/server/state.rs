use sea_orm::DatabaseConnection;

/// Application state shared across all request handlers.
///
/// Initialized once during startup and cloned cheaply for each request through
/// Axum's state extraction; `DatabaseConnection` is a connection pool, so clones
/// share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
