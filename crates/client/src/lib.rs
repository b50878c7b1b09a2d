//! Typed HTTP client for the villa API.
//!
//! [`ApiClient`] sends a described [`ApiRequest`] and decodes the reply;
//! [`VillaClient`] builds those requests for the `/api/villaAPI` routes.

pub mod config;
pub mod error;
pub mod http;
pub mod villa;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{ApiClient, ApiRequest, ApiType};
pub use villa::VillaClient;
