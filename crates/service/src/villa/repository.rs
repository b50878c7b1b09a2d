use async_trait::async_trait;
use common::{VillaCreateDto, VillaUpdateDto};
use models::villa::{self, Entity as VillaEntity};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::errors::ServiceError;

/// Persistence operations for villas.
#[async_trait]
pub trait VillaRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<villa::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<villa::Model>, ServiceError>;
    /// Case-insensitive lookup by name.
    async fn find_by_name(&self, name: &str) -> Result<Option<villa::Model>, ServiceError>;
    async fn insert(&self, dto: VillaCreateDto) -> Result<villa::Model, ServiceError>;
    /// Overwrite every business column of row `dto.id`; `NotFound` if no such row.
    async fn replace(&self, dto: VillaUpdateDto) -> Result<villa::Model, ServiceError>;
    /// Returns true if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmVillaRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmVillaRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl VillaRepository for SeaOrmVillaRepository {
    async fn list(&self) -> Result<Vec<villa::Model>, ServiceError> {
        let rows = VillaEntity::find().order_by_asc(villa::Column::Id).all(&self.db).await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<villa::Model>, ServiceError> {
        let found = VillaEntity::find_by_id(id).one(&self.db).await?;
        Ok(found)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<villa::Model>, ServiceError> {
        let found = VillaEntity::find()
            // same fold as the LOWER(name) unique index
            .filter(
                Expr::expr(Func::lower(Expr::col(villa::Column::Name)))
                    .eq(Func::lower(Expr::val(name.to_owned()))),
            )
            .one(&self.db)
            .await?;
        Ok(found)
    }

    async fn insert(&self, dto: VillaCreateDto) -> Result<villa::Model, ServiceError> {
        let created = villa::new_active_model(dto).insert(&self.db).await?;
        Ok(created)
    }

    async fn replace(&self, dto: VillaUpdateDto) -> Result<villa::Model, ServiceError> {
        let id = dto.id;
        match villa::replacement_active_model(dto).update(&self.db).await {
            Ok(m) => Ok(m),
            Err(DbErr::RecordNotUpdated) => Err(ServiceError::NotFound(format!("villa {id} not found"))),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = VillaEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use sea_orm::prelude::DateTimeWithTimeZone;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Mutex, MutexGuard};

    fn now() -> DateTimeWithTimeZone {
        chrono::Utc::now().into()
    }

    #[derive(Default)]
    pub struct MockVillaRepository {
        rows: Mutex<BTreeMap<i32, villa::Model>>, // key: id
        next_id: Mutex<i32>,
        calls: AtomicUsize,
    }

    impl MockVillaRepository {
        /// Number of repository calls made so far.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn rows(&self) -> Result<MutexGuard<'_, BTreeMap<i32, villa::Model>>, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.rows.lock().map_err(|_| ServiceError::Db("mock repository poisoned".into()))
        }
    }

    #[async_trait]
    impl VillaRepository for MockVillaRepository {
        async fn list(&self) -> Result<Vec<villa::Model>, ServiceError> {
            Ok(self.rows()?.values().cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<villa::Model>, ServiceError> {
            Ok(self.rows()?.get(&id).cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<villa::Model>, ServiceError> {
            let key = villa::name_key(name);
            Ok(self.rows()?.values().find(|m| villa::name_key(&m.name) == key).cloned())
        }

        async fn insert(&self, dto: VillaCreateDto) -> Result<villa::Model, ServiceError> {
            let mut rows = self.rows()?;
            let key = villa::name_key(&dto.name);
            if rows.values().any(|m| villa::name_key(&m.name) == key) {
                return Err(ServiceError::DuplicateName);
            }
            let mut next = self.next_id.lock().map_err(|_| ServiceError::Db("mock repository poisoned".into()))?;
            *next += 1;
            let stamp = now();
            let model = villa::Model {
                id: *next,
                name: dto.name,
                details: dto.details,
                rate: dto.rate,
                occupancy: dto.occupancy,
                sqft: dto.sqft,
                image_url: dto.image_url,
                amenity: dto.amenity,
                created_at: stamp,
                updated_at: stamp,
            };
            rows.insert(model.id, model.clone());
            Ok(model)
        }

        async fn replace(&self, dto: VillaUpdateDto) -> Result<villa::Model, ServiceError> {
            let mut rows = self.rows()?;
            let key = villa::name_key(&dto.name);
            if rows.values().any(|m| m.id != dto.id && villa::name_key(&m.name) == key) {
                return Err(ServiceError::DuplicateName);
            }
            let Some(existing) = rows.get_mut(&dto.id) else {
                return Err(ServiceError::NotFound(format!("villa {} not found", dto.id)));
            };
            existing.name = dto.name;
            existing.details = dto.details;
            existing.rate = dto.rate;
            existing.occupancy = dto.occupancy;
            existing.sqft = dto.sqft;
            existing.image_url = dto.image_url;
            existing.amenity = dto.amenity;
            existing.updated_at = now();
            Ok(existing.clone())
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows()?.remove(&id).is_some())
        }
    }
}
