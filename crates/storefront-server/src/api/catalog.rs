use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Serialize;
use storefront_core::{AttributeGroup, CatalogView, PriceRange, SortKey};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, CatalogQuery};

#[derive(Debug, Serialize)]
pub(super) struct SortKeyItem {
    key: SortKey,
    label: &'static str,
    /// Whether the storefront's sort dropdown lists this key.
    in_menu: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct AttributeGroupItem {
    group: AttributeGroup,
    label: &'static str,
    options: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub(super) struct FiltersData {
    sort_keys: Vec<SortKeyItem>,
    attribute_groups: Vec<AttributeGroupItem>,
    default_price: PriceRange,
}

pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ApiResponse<CatalogView>>, ApiError> {
    let (criteria, sort) = CatalogQuery::from_pairs(pairs)
        .to_criteria()
        .map_err(|message| ApiError::new(req_id.0.clone(), "validation_error", message))?;

    let view = state.catalog.read().await.view_with(&criteria, sort);
    tracing::debug!(
        results = view.items.len(),
        in_stock = view.in_stock_count,
        sort = sort.slug(),
        "catalog view served"
    );

    Ok(Json(ApiResponse::new(view, req_id.0)))
}

pub(super) async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<String>>> {
    let categories = state.catalog.read().await.categories().to_vec();
    Json(ApiResponse::new(categories, req_id.0))
}

pub(super) async fn list_filters(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<FiltersData>> {
    let sort_keys = SortKey::ALL
        .into_iter()
        .map(|key| SortKeyItem {
            key,
            label: key.label(),
            in_menu: SortKey::MENU.contains(&key),
        })
        .collect();

    let attribute_groups = AttributeGroup::ALL
        .into_iter()
        .map(|group| AttributeGroupItem {
            group,
            label: group.label(),
            options: group.options(),
        })
        .collect();

    Json(ApiResponse::new(
        FiltersData {
            sort_keys,
            attribute_groups,
            default_price: PriceRange::default(),
        },
        req_id.0,
    ))
}
