//! Documentation endpoints: components, mappings, assets and tokens.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use mcpdocs_catalog::Framework;

use crate::server::SharedCatalog;

/// Unique values in first-seen order.
fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

/// `GET /components`
pub async fn list_components(State(catalog): State<SharedCatalog>) -> Json<serde_json::Value> {
    let components = catalog.list_all();
    let frameworks: Vec<_> = Framework::ALL.iter().map(Framework::as_str).collect();

    Json(json!({
        "total": components.len(),
        "components": components,
        "frameworks": frameworks,
    }))
}

/// `GET /components/{name}`
pub async fn show_component(
    State(catalog): State<SharedCatalog>,
    Path(name): Path<String>,
) -> Response {
    let merged = catalog.get(&name);

    if merged.is_empty() {
        tracing::debug!("Component not found: {}", name);
        return (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "Component not found",
                "component_name": name,
                "available_components": catalog.component_names(),
            })),
        )
            .into_response();
    }

    Json(json!({
        "name": name,
        "rails": merged.rails,
        "vue": merged.vue,
        "mapping_rules": catalog.figma_mapping_rules(&name),
    }))
    .into_response()
}

/// `GET /mapping/{name}`
pub async fn component_mapping(
    State(catalog): State<SharedCatalog>,
    Path(name): Path<String>,
) -> Response {
    match catalog.mapping(&name) {
        Some(mapping) => Json(mapping).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "Component mapping not found",
                "component_name": name,
                "available_components": catalog.component_names(),
            })),
        )
            .into_response(),
    }
}

/// `GET /assets`
pub async fn list_assets(State(catalog): State<SharedCatalog>) -> Json<serde_json::Value> {
    let assets = catalog.assets();

    Json(json!({
        "assets": assets,
        "total": assets.len(),
        "categories": unique(assets.iter().map(|a| a.category.as_str())),
    }))
}

/// `GET /assets/{name}`
pub async fn show_asset(
    State(catalog): State<SharedCatalog>,
    Path(name): Path<String>,
) -> Response {
    match catalog.asset(&name) {
        Some(docs) => Json(docs).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "Asset not found",
                "asset_name": name,
                "available_assets": catalog.assets().iter().map(|a| &a.name).collect::<Vec<_>>(),
            })),
        )
            .into_response(),
    }
}

/// `GET /tokens`
pub async fn list_tokens(State(catalog): State<SharedCatalog>) -> Json<serde_json::Value> {
    let tokens = catalog.tokens();

    Json(json!({
        "tokens": tokens,
        "total": tokens.len(),
        "categories": unique(tokens.iter().map(|t| t.category.as_str())),
    }))
}

/// `GET /tokens/{name}`
pub async fn show_token(
    State(catalog): State<SharedCatalog>,
    Path(name): Path<String>,
) -> Response {
    match catalog.token(&name) {
        Some(docs) => Json(docs).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "Token not found",
                "token_name": name,
                "available_tokens": catalog.tokens().iter().map(|t| &t.name).collect::<Vec<_>>(),
            })),
        )
            .into_response(),
    }
}
