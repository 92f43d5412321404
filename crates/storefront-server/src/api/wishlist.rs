use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;
use storefront_core::CatalogAction;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct WishlistData {
    ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub(super) struct WishlistToggle {
    id: i64,
    wishlisted: bool,
}

pub(super) async fn list_wishlist(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<WishlistData>> {
    let ids = state.catalog.read().await.wishlist();
    Json(ApiResponse::new(WishlistData { ids }, req_id.0))
}

pub(super) async fn toggle_wishlist(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<WishlistToggle>>, ApiError> {
    let id: i64 = raw_id.parse().map_err(|_| {
        ApiError::new(
            req_id.0.clone(),
            "validation_error",
            format!("product id must be an integer, got \"{raw_id}\""),
        )
    })?;

    let mut catalog = state.catalog.write().await;
    if !catalog.contains_product(id) {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("product {id} not found"),
        ));
    }
    catalog.apply(CatalogAction::ToggleWishlist(id));
    let wishlisted = catalog.is_wishlisted(id);
    drop(catalog);

    tracing::info!(id, wishlisted, "wishlist toggled");
    Ok(Json(ApiResponse::new(WishlistToggle { id, wishlisted }, req_id.0)))
}
