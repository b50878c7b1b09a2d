use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::villa::{SeaOrmVillaRepository, VillaRepository, VillaService};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub villas: VillaService,
}

impl ServerState {
    pub fn new(repo: Arc<dyn VillaRepository>) -> Self {
        Self { villas: VillaService::new(repo) }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmVillaRepository::new(db)))
    }
}
