//! OpenAPI documentation configuration.

use crate::controllers::health_controller::{DependencyStatus, HealthResponse, ReadinessResponse};
use catalog_core::{ErrorResponse, Product, ProductId};
use catalog_service::ProductRequest;
use utoipa::OpenApi;

/// Path the OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/openapi/v1.json";

/// OpenAPI documentation for the catalog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "1.0.0",
        description = "Product catalog with a Redis read cache"
    ),
    paths(
        crate::controllers::product_controller::list_products,
        crate::controllers::product_controller::get_product,
        crate::controllers::product_controller::create_product,
        crate::controllers::product_controller::update_product,
        crate::controllers::product_controller::delete_product,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            Product,
            ProductId,
            ProductRequest,
            ErrorResponse,
            HealthResponse,
            ReadinessResponse,
            DependencyStatus,
        )
    ),
    tags(
        (name = "products", description = "Product resource"),
        (name = "health", description = "Health probes")
    )
)]
pub struct ApiDoc;
