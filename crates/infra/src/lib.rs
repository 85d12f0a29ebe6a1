mod config;
mod repos;
mod services;
mod system;

pub use config::{ClubWebhookConfig, Config, VapidConfig};
pub use repos::*;
pub use services::*;
use std::sync::Arc;
pub use system::{FixedSys, ISys, RealSys};
use tracing::warn;

#[derive(Clone)]
pub struct TtContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub services: Services,
}

impl TtContext {
    async fn create_postgres(connection_string: &str, config: Config) -> Self {
        let repos = Repos::create_postgres(connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        let services = Services::from_config(&config);
        Self {
            repos,
            services,
            config,
            sys: Arc::new(RealSys {}),
        }
    }

    /// Context with inmemory repositories and services, the clock is real
    /// until replaced
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            services: Services::create_inmemory(),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> TtContext {
    let config = Config::new();
    match std::env::var("DATABASE_URL") {
        Ok(connection_string) => TtContext::create_postgres(&connection_string, config).await,
        Err(_) => {
            warn!("DATABASE_URL not set - all data is kept in memory and lost on restart");
            TtContext {
                repos: Repos::create_inmemory(),
                services: Services::from_config(&config),
                config,
                sys: Arc::new(RealSys {}),
            }
        }
    }
}
