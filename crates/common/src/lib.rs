//! Types and helpers shared by the villa API, its service layer and the
//! outbound client.

pub mod types;
pub mod utils;

pub use types::model_state::ModelState;
pub use types::villa::{VillaCreateDto, VillaDto, VillaUpdateDto};
