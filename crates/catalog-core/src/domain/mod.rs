//! Domain entities of the catalog.

pub mod entities;

pub use entities::*;
