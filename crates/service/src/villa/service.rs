use std::sync::Arc;

use common::{ModelState, VillaCreateDto, VillaDto, VillaUpdateDto};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::errors::ServiceError;
use crate::patch::{self, JsonPatch};
use crate::villa::repository::VillaRepository;

/// Villa business rules on top of a [`VillaRepository`].
///
/// Ids must be positive; `0` is rejected as invalid input rather than
/// reported as absent.
#[derive(Clone)]
pub struct VillaService {
    repo: Arc<dyn VillaRepository>,
}

fn check_id(id: i32) -> Result<(), ServiceError> {
    if id <= 0 {
        return Err(ServiceError::BadInput(format!("invalid villa id {id}")));
    }
    Ok(())
}

fn validate<T: Validate>(dto: &T) -> Result<(), ServiceError> {
    dto.validate().map_err(|e| ServiceError::Validation(ModelState::from(e)))
}

impl VillaService {
    pub fn new(repo: Arc<dyn VillaRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<VillaDto>, ServiceError> {
        let rows = self.repo.list().await?;
        debug!(count = rows.len(), "villas listed");
        Ok(rows.into_iter().map(VillaDto::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<VillaDto, ServiceError> {
        check_id(id)?;
        self.repo
            .get(id)
            .await?
            .map(VillaDto::from)
            .ok_or_else(|| ServiceError::not_found("villa"))
    }

    /// Create a villa. Names are unique regardless of case.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use common::VillaCreateDto;
    /// use service::villa::{repository::mock::MockVillaRepository, VillaService};
    ///
    /// let svc = VillaService::new(Arc::new(MockVillaRepository::default()));
    /// let dto = VillaCreateDto {
    ///     name: "Royal Villa".into(),
    ///     details: String::new(),
    ///     rate: 200.0,
    ///     occupancy: 4,
    ///     sqft: 550,
    ///     image_url: String::new(),
    ///     amenity: String::new(),
    /// };
    /// let created = tokio_test::block_on(svc.create(dto.clone())).unwrap();
    /// assert_eq!(created.id, 1);
    ///
    /// let shouting = VillaCreateDto { name: "ROYAL VILLA".into(), ..dto };
    /// assert!(tokio_test::block_on(svc.create(shouting)).is_err());
    /// ```
    #[instrument(skip(self, dto), fields(name = %dto.name))]
    pub async fn create(&self, dto: VillaCreateDto) -> Result<VillaDto, ServiceError> {
        validate(&dto)?;
        if self.repo.find_by_name(&dto.name).await?.is_some() {
            warn!("duplicate villa name rejected");
            return Err(ServiceError::DuplicateName);
        }
        let created = self.repo.insert(dto).await?;
        info!(id = created.id, "villa created");
        Ok(created.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        check_id(id)?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("villa"));
        }
        info!(id, "villa deleted");
        Ok(())
    }

    /// Full replacement of villa `id` with `dto`.
    #[instrument(skip(self, dto))]
    pub async fn update(&self, id: i32, dto: VillaUpdateDto) -> Result<(), ServiceError> {
        if id != dto.id {
            return Err(ServiceError::BadInput(format!(
                "path id {id} does not match body id {}",
                dto.id
            )));
        }
        check_id(id)?;
        validate(&dto)?;
        self.repo.replace(dto).await?;
        info!(id, "villa replaced");
        Ok(())
    }

    /// Apply a JSON patch to villa `id`.
    ///
    /// The patched copy is validated in full before anything is written; a
    /// patch that fails to apply or produces an invalid villa leaves the
    /// stored row untouched.
    #[instrument(skip(self, doc), fields(ops = doc.0.len()))]
    pub async fn patch(&self, id: i32, doc: &JsonPatch) -> Result<(), ServiceError> {
        check_id(id)?;
        let current = self
            .repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::BadInput(format!("villa {id} does not exist")))?;

        let mut state = ModelState::new();
        if doc.touches("id") {
            state.add_error("/id", "The id of a villa cannot be changed.");
        }
        let patched = match patch::apply_to(doc, &VillaUpdateDto::from(current)) {
            Ok(p) => p,
            Err(errors) => {
                state.merge(errors);
                return Err(ServiceError::Validation(state));
            }
        };
        if patched.id != id && !doc.touches("id") {
            state.add_error("/id", "The id of a villa cannot be changed.");
        }
        if let Err(e) = patched.validate() {
            state.merge(ModelState::from(e));
        }
        if !state.is_valid() {
            warn!("villa patch rejected");
            return Err(ServiceError::Validation(state));
        }

        self.repo.replace(patched).await?;
        info!(id, "villa patched");
        Ok(())
    }
}
