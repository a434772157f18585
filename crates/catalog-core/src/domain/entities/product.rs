//! Product entity.

use crate::ProductId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum length of a product name.
pub const PRODUCT_NAME_MAX_LEN: u64 = 100;

/// Maximum length of a product description.
pub const PRODUCT_DESCRIPTION_MAX_LEN: u64 = 500;

/// Number of fractional digits stored for prices (`NUMERIC(18,2)`).
pub const PRICE_SCALE: u32 = 2;

/// Number of integer digits available for prices (`NUMERIC(18,2)`).
pub const PRICE_INTEGER_DIGITS: u32 = 16;

/// A product as stored in the catalog.
///
/// This is also the shape cached under `product:{id}` and returned by the
/// API, serialized with camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Optional long description.
    pub description: Option<String>,

    /// Unit price with two fractional digits.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[cfg_attr(feature = "openapi", schema(value_type = f64))]
    pub price: Decimal,

    /// Units in stock.
    pub stock: i32,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Overwrites the mutable fields and refreshes `updated_at`.
    ///
    /// `id` and `created_at` are left untouched. `updated_at` never moves
    /// before `created_at`, even if the wall clock steps backwards.
    pub fn apply(&mut self, details: ProductDetails) {
        self.name = details.name;
        self.description = details.description;
        self.price = details.price;
        self.stock = details.stock;
        self.updated_at = Utc::now().max(self.created_at);
    }
}

/// The client-controlled fields of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}

impl ProductDetails {
    /// Creates product details, rounding the price to the stored scale.
    #[must_use]
    pub fn new(name: String, description: Option<String>, price: Decimal, stock: i32) -> Self {
        Self {
            name,
            description,
            price: price.round_dp(PRICE_SCALE),
            stock,
        }
    }

    /// Returns `true` if the price fits the `NUMERIC(18,2)` column.
    #[must_use]
    pub fn price_fits_column(&self) -> bool {
        let limit = Decimal::from(10_i64.pow(PRICE_INTEGER_DIGITS));
        self.price.abs() < limit
    }
}

/// A product that has not been persisted yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub details: ProductDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewProduct {
    /// Stamps the details with the current time; both timestamps are equal.
    #[must_use]
    pub fn new(details: ProductDetails) -> Self {
        let now = Utc::now();
        Self {
            details,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builds the stored product once the store has assigned an id.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.details.name,
            description: self.details.description,
            price: self.details.price,
            stock: self.details.stock,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
