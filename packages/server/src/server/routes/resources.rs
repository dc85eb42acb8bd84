use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::common::ResourceId;
use crate::domains::resources::{
    CatalogError, CatalogPage, ListResourcesParams, NewResource, PublishResourceInput, Resource,
};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// `GET /api/resources` - one page of the catalog, optionally filtered by topic.
pub async fn list_resources(
    Extension(state): Extension<AppState>,
    Query(params): Query<ListResourcesParams>,
) -> Result<Json<CatalogPage>, ApiError> {
    let filter = params
        .filter()
        .map_err(|e| ApiError::BadRequest(format!("Invalid topic id: {}", e)))?;
    let pagination = params.page_request().validate()?;

    let page = state.catalog.list(filter, pagination).await?;
    Ok(Json(page))
}

/// `GET /api/resources/:id`
pub async fn get_resource(
    Extension(state): Extension<AppState>,
    Path(id): Path<ResourceId>,
) -> Result<Json<Resource>, ApiError> {
    state
        .catalog
        .find(id)
        .await?
        .map(Json)
        .ok_or(ApiError::Catalog(CatalogError::MissingResource(id)))
}

/// `POST /api/resources` - submit a draft.
pub async fn create_resource(
    Extension(state): Extension<AppState>,
    Json(input): Json<NewResource>,
) -> Result<(StatusCode, Json<Resource>), ApiError> {
    info!(url = %input.url, "Resource submitted");
    let resource = state.catalog.create(input).await?;
    Ok((StatusCode::CREATED, Json(resource)))
}

/// `POST /api/resources/:id/publish`
///
/// Who may publish is decided by the auth layer in front of this route.
pub async fn publish_resource(
    Extension(state): Extension<AppState>,
    Path(id): Path<ResourceId>,
    Json(input): Json<PublishResourceInput>,
) -> Result<Json<Resource>, ApiError> {
    let resource = state.catalog.publish(id, input.publisher).await?;
    Ok(Json(resource))
}
