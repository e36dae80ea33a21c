//! Application state management.
//!
//! The shared state holds the configuration, the MongoDB handles, and the
//! object-storage client. It is built exactly once through an explicit
//! lazy initializer: concurrent cold starts converge on the same ready
//! instance instead of racing through a check-then-set.

use media_store::CloudinaryStore;
use mongodb::{Client, Database};
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::config::Config;

static STATE: OnceCell<AppState> = OnceCell::const_new();

/// Shared application state.
///
/// Cloning is inexpensive (pooled client + Arc), so handlers receive
/// clones freely.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
    /// Object-storage client shared by every upload path
    pub store: Arc<CloudinaryStore>,
}

impl AppState {
    /// Get the process-wide state, initializing it on first call.
    ///
    /// The initializer runs at most once; callers arriving while it is in
    /// flight wait for it and then share the ready instance.
    pub async fn get_or_init(config: Config) -> eyre::Result<&'static AppState> {
        STATE
            .get_or_try_init(|| async move { Self::initialize(config).await })
            .await
    }

    async fn initialize(config: Config) -> eyre::Result<AppState> {
        // Connect to MongoDB with retry to ride out transient startup issues
        let mongo_client =
            database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;

        let db = mongo_client.database(config.mongodb.database());
        let store = Arc::new(CloudinaryStore::new(config.cloudinary.clone()));

        Ok(AppState {
            config,
            mongo_client,
            db,
            store,
        })
    }
}
