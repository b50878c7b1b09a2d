//! Migrator registering the villa schema. Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_villa;
mod m20240101_000002_villa_name_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_villa::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000002_villa_name_index::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, Statement};

    #[tokio::test]
    async fn up_and_down_on_sqlite() -> Result<(), DbErr> {
        // a single pooled connection keeps the in-memory database alive
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1);
        let db = Database::connect(opt).await?;
        Migrator::up(&db, None).await?;
        assert!(db.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "INSERT INTO villa (name, details, rate, occupancy, sqft, image_url, amenity, created_at, updated_at) \
             VALUES ('Royal', '', 1.0, 1, 1, '', '', '2024-01-01T00:00:00+00:00', '2024-01-01T00:00:00+00:00')",
        ))
        .await
        .is_ok());

        // unique on LOWER(name)
        let dup = db
            .execute(Statement::from_string(
                DatabaseBackend::Sqlite,
                "INSERT INTO villa (name, details, rate, occupancy, sqft, image_url, amenity, created_at, updated_at) \
                 VALUES ('ROYAL', '', 1.0, 1, 1, '', '', '2024-01-01T00:00:00+00:00', '2024-01-01T00:00:00+00:00')",
            ))
            .await;
        assert!(dup.is_err());

        Migrator::down(&db, None).await?;
        Ok(())
    }
}
