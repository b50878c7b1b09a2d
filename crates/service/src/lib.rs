//! Service layer providing villa CRUD operations on top of models.
//! - Separates business rules from data access.
//! - Reuses entity definitions and mappings in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod patch;
#[cfg(test)]
pub mod test_support;
pub mod villa;
