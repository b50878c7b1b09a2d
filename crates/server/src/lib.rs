//! HTTP surface of the villa API: axum router, handlers, error bodies and
//! the OpenAPI document.

pub mod errors;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;
pub use state::ServerState;
