//! Product resource controller.

use crate::{
    extractors::ApiJson,
    responses::{no_content, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use catalog_core::{CatalogError, ErrorResponse, Product, ProductId};
use catalog_service::ProductRequest;
use tracing::debug;

/// Mount point of the product resource.
pub const BASE_PATH: &str = "/api/products";

/// Creates the product router, to be nested under [`BASE_PATH`].
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// List all products.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 500, description = "Store or cache unavailable", body = ErrorResponse)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    debug!("List products request");

    let products = state.product_service.list_products().await?;
    Ok(Json(products))
}

/// Get a product by ID.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    debug!("Get product request: {}", id);

    let product_id = parse_product_id(&id)?;
    let product = state.product_service.get_product(product_id).await?;
    Ok(Json(product))
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Created", body = Product,
            headers(("Location" = String, description = "URL of the new product"))),
        (status = 400, description = "Invalid body", body = ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ProductRequest>,
) -> ApiResult<impl IntoResponse> {
    debug!("Create product request: {}", request.name);

    let product = state.product_service.create_product(request).await?;
    let location = format!("{BASE_PATH}/{}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// Replace a product.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id; must equal the body id")),
    request_body = ProductRequest,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Id mismatch or invalid body", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<ProductRequest>,
) -> ApiResult<StatusCode> {
    debug!("Update product request: {}", id);

    let product_id = parse_product_id(&id)?;
    state
        .product_service
        .update_product(product_id, request)
        .await?;
    Ok(no_content())
}

/// Delete a product.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown id", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    debug!("Delete product request: {}", id);

    let product_id = parse_product_id(&id)?;
    state.product_service.delete_product(product_id).await?;
    Ok(no_content())
}

fn parse_product_id(id: &str) -> Result<ProductId, AppError> {
    ProductId::parse(id)
        .map_err(|_| AppError(CatalogError::Validation(format!("Invalid product ID: {id}"))))
}
