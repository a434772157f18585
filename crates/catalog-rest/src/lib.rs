//! # Catalog REST
//!
//! HTTP surface of the catalog service: the `/api/products` resource,
//! health probes and the OpenAPI document.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
