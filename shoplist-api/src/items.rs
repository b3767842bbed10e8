use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use shoplist_core::{Item, ItemError, ItemPatch};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ItemsResponse {
    items: Vec<Item>,
}

#[derive(Debug, Serialize)]
struct AddedResponse {
    added: Item,
}

#[derive(Debug, Serialize)]
struct ItemResponse {
    item: Item,
}

#[derive(Debug, Serialize)]
struct UpdatedResponse {
    updated: Item,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{name}",
            get(get_item).patch(update_item).delete(delete_item),
        )
}

/// GET /items
async fn list_items(State(state): State<AppState>) -> Json<ItemsResponse> {
    let items = state.items.list().await;
    Json(ItemsResponse { items })
}

/// POST /items
async fn create_item(
    State(state): State<AppState>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<AddedResponse>), AppError> {
    let name = req
        .name
        .filter(|name| !name.is_empty())
        .ok_or(ItemError::NameRequired)?;

    let item = Item::new(name, req.price.unwrap_or(0.0));
    state.items.append(item.clone()).await;

    info!("Item added: {}", item.name);
    Ok((StatusCode::CREATED, Json(AddedResponse { added: item })))
}

/// GET /items/{name}
async fn get_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ItemResponse>, AppError> {
    let item = state
        .items
        .find_by_name(&name)
        .await
        .ok_or(ItemError::NotFound)?;

    Ok(Json(ItemResponse { item }))
}

/// PATCH /items/{name}
async fn update_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(patch): Json<ItemPatch>,
) -> Result<Json<UpdatedResponse>, AppError> {
    let updated = state
        .items
        .update_by_name(&name, &patch)
        .await
        .ok_or(ItemError::NotFound)?;

    info!("Item updated: {} -> {}", name, updated.name);
    Ok(Json(UpdatedResponse { updated }))
}

/// DELETE /items/{name}
async fn delete_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.items.remove_by_name(&name).await {
        return Err(ItemError::NotFound.into());
    }

    info!("Item deleted: {}", name);
    Ok(Json(MessageResponse {
        message: "Deleted".to_string(),
    }))
}
