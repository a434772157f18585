//! Data transfer objects for the product API.

mod product_dto;

pub use product_dto::*;
