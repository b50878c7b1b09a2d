use common::ModelState;
use models::errors::ModelError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("bad input: {0}")]
    BadInput(String),
    #[error("validation failed")]
    Validation(ModelState),
    #[error("Villa Already Exists")]
    DuplicateName,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Conflict(_) => ServiceError::DuplicateName,
            other => ServiceError::Model(other),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        ModelError::from(err).into()
    }
}
