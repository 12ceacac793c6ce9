use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::database::{self, Store};

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let pool = database::create_pool(&self.config.storage.database_path)?;
        let store = Store::new(pool)?;
        self.seed_admin(&store)?;

        let state = Arc::new(AppState::new(store, self.config.clone()));
        let app = create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    fn seed_admin(&self, store: &Store) -> Result<()> {
        let Some(password) = &self.config.accounts.admin_password else {
            return Ok(());
        };

        let mut catalog = store.load_catalog()?;
        if catalog.ensure_admin(password) {
            store.save_catalog(&catalog)?;
        }
        Ok(())
    }
}
