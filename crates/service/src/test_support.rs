#![cfg(test)]
use std::sync::Arc;

use common::VillaCreateDto;

use crate::villa::{SeaOrmVillaRepository, VillaService};

/// Service over a fresh, migrated in-memory SQLite database.
pub async fn memory_service() -> Result<VillaService, anyhow::Error> {
    let db = models::db::connect_memory().await?;
    Ok(VillaService::new(Arc::new(SeaOrmVillaRepository::new(db))))
}

pub fn create_dto(name: &str) -> VillaCreateDto {
    VillaCreateDto {
        name: name.to_string(),
        details: "Ocean front".into(),
        rate: 200.0,
        occupancy: 4,
        sqft: 550,
        image_url: "https://img.example.com/villa.jpg".into(),
        amenity: "Pool".into(),
    }
}
