//! Villa use cases: three-layer split of repository trait, SeaORM
//! implementation and business service.

pub mod repository;
pub mod service;

pub use repository::{SeaOrmVillaRepository, VillaRepository};
pub use service::VillaService;
