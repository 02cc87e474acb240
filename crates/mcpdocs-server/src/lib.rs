//! JSON API for merged component documentation.
//!
//! Serves the catalog's components, tokens and assets, and maps Figma
//! payloads to rails or vue component code.

pub mod handlers;
pub mod mapping;
pub mod server;

pub use server::{build_router, ApiServer, ApiServerConfig, ServerError, SharedCatalog};
