use axum::Router;
use resource_store::Repository;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

use super::seed::demo_villas;
use crate::api;
use crate::clients::{VillaClient, VillaNumberClient};
use crate::config::AppConfig;
use crate::model::{Villa, VillaNumber};
use crate::{villa, villa_number};

/// The runtime orchestrator for the villa service.
///
/// `VillaSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping both store actors
/// - **Dependency Wiring**: both resource clients see both stores (foreign key
///   checks one way, the delete restrict rule the other)
///
/// # Example
///
/// ```ignore
/// let system = VillaSystem::start(&AppConfig::default());
/// axum::serve(listener, system.router()).await?;
/// system.shutdown().await?;
/// ```
pub struct VillaSystem {
    /// Client for the Villa resource
    pub villa_client: VillaClient,

    /// Client for the VillaNumber resource
    pub villa_number_client: VillaNumberClient,

    /// Task handles for the store actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl VillaSystem {
    /// Starts a system with the default configuration and empty stores.
    pub fn new() -> Self {
        Self::start(&AppConfig::default())
    }

    /// Creates and initializes the stores and clients described by `config`.
    pub fn start(config: &AppConfig) -> Self {
        let buffer_size = config.store.buffer_size.get();

        let (villa_actor, villa_store) = villa::new(buffer_size);
        let villa_actor = if config.seed_demo_data {
            let villas = demo_villas();
            info!(count = villas.len(), "Seeding demo villas");
            villa_actor.with_records(villas)
        } else {
            villa_actor
        };
        let villa_handle = tokio::spawn(villa_actor.run());

        let (villa_number_actor, villa_number_store) = villa_number::new(buffer_size);
        let villa_number_handle = tokio::spawn(villa_number_actor.run());

        let villas: Arc<dyn Repository<Villa>> = Arc::new(villa_store);
        let villa_numbers: Arc<dyn Repository<VillaNumber>> = Arc::new(villa_number_store);

        Self {
            villa_client: VillaClient::new(villas.clone(), villa_numbers.clone()),
            villa_number_client: VillaNumberClient::new(villa_numbers, villas),
            handles: vec![villa_handle, villa_number_handle],
        }
    }

    /// Router over this system's clients.
    pub fn router(&self) -> Router {
        api::router(self.villa_client.clone(), self.villa_number_client.clone())
    }

    /// Gracefully shuts down both stores.
    ///
    /// Dropping the clients closes the channels; each store finishes the requests it
    /// has queued and exits. Routers returned by [`VillaSystem::router`] hold client
    /// clones, so they must be dropped first or this waits forever.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down villa system...");

        drop(self.villa_client);
        drop(self.villa_number_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Store task failed");
                return Err(e);
            }
        }

        info!("Villa system shutdown complete.");
        Ok(())
    }
}

impl Default for VillaSystem {
    fn default() -> Self {
        Self::new()
    }
}

