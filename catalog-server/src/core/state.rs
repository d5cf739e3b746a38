use std::sync::Arc;
use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::auth::{self, JwtService};
use crate::core::Config;
use crate::db::repository::ProductRepository;

/// Server state - shared handles for every service
///
/// Cloning is shallow (`Arc` and handle clones), so the state is cheap to
/// pass into axum.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | Configuration (immutable) |
/// | db | Embedded SurrealDB handle |
/// | jwt_service | Admin session tokens |
/// | admin_password_hash | Argon2 hash of the dashboard credential |
/// | http | Outbound client for the external relays |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub jwt_service: Arc<JwtService>,
    pub admin_password_hash: Arc<String>,
    pub http: reqwest::Client,
}

impl ServerState {
    /// Initialize server state against the on-disk database
    ///
    /// # Panics
    ///
    /// Panics when the working directory or database cannot be opened.
    pub async fn initialize(config: &Config) -> Self {
        let db_dir = config.database_dir();
        std::fs::create_dir_all(&db_dir).expect("Failed to create work directory structure");

        let db = Surreal::new::<RocksDb>(db_dir.to_string_lossy().as_ref())
            .await
            .expect("Failed to open database");

        Self::with_db(config.clone(), db).await
    }

    /// Build state around an already-opened database handle
    ///
    /// Used by [`initialize()`] and by tests running on the in-memory
    /// engine.
    pub async fn with_db(config: Config, db: Surreal<Db>) -> Self {
        db.use_ns("catalog")
            .use_db("catalog")
            .await
            .expect("Failed to select database namespace");
        tracing::info!("Database connection established");

        let admin_password_hash = auth::hash_password(&config.admin_password)
            .expect("Failed to hash the admin credential");

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build the outbound HTTP client");

        Self {
            config,
            db,
            jwt_service,
            admin_password_hash: Arc::new(admin_password_hash),
            http,
        }
    }

    /// Get a product repository over the shared database handle
    pub fn product_repository(&self) -> ProductRepository {
        ProductRepository::new(self.db.clone())
    }

    /// Get the JWT service
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
