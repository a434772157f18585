//! Product request body.

use catalog_core::{CatalogError, CatalogResult, ProductDetails, PRICE_INTEGER_DIGITS};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body accepted by create and update.
///
/// `id` is ignored on create. On update it must equal the path id.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[serde(default)]
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[serde(default)]
    pub description: Option<String>,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub price: Decimal,

    pub stock: i32,
}

impl ProductRequest {
    /// Converts the body into domain details, rounding the price to cents.
    pub fn into_details(self) -> CatalogResult<ProductDetails> {
        let details = ProductDetails::new(self.name, self.description, self.price, self.stock);
        if !details.price_fits_column() {
            return Err(CatalogError::validation(format!(
                "price: must be less than 10^{PRICE_INTEGER_DIGITS} in magnitude"
            )));
        }
        Ok(details)
    }
}
