//! Figma mapping endpoints.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use mcpdocs_catalog::Framework;
use mcpdocs_figma::{generator_for, FigmaMapper, MappingOutcome};

use crate::server::SharedCatalog;

/// `POST /map-figma-to-rails`
pub async fn figma_to_rails(State(catalog): State<SharedCatalog>, body: Bytes) -> Response {
    map_figma(&catalog, &body, Framework::Rails)
}

/// `POST /map-figma-to-vue`
pub async fn figma_to_vue(State(catalog): State<SharedCatalog>, body: Bytes) -> Response {
    map_figma(&catalog, &body, Framework::Vue)
}

/// Nil, false, whitespace-only strings and empty collections.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        _ => false,
    }
}

/// Pull `figma_data` out of a request body; `None` when absent or blank.
fn extract_figma_data(body: &[u8]) -> Option<Value> {
    let mut request: Value = serde_json::from_slice(body).ok()?;
    let figma_data = request.get_mut("figma_data")?.take();
    (!is_blank(&figma_data)).then_some(figma_data)
}

fn map_figma(catalog: &SharedCatalog, body: &[u8], framework: Framework) -> Response {
    let Some(figma_data) = extract_figma_data(body) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Figma data is required" })),
        )
            .into_response();
    };

    let outcome = FigmaMapper::new(catalog).map(&figma_data, generator_for(framework));

    let status = match &outcome {
        MappingOutcome::Mapped(_) => StatusCode::OK,
        MappingOutcome::ComponentNotFound { .. } => StatusCode::NOT_FOUND,
        MappingOutcome::Failed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };

    (status, Json(outcome.to_json())).into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use mcpdocs_catalog::Catalog;

    use crate::server::build_router;

    use super::*;

    async fn post_json(uri: &str, body: &str) -> (StatusCode, Value) {
        let app = build_router(Arc::new(Catalog::builtin().unwrap()));
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    const BADGE_REQUEST: &str = r#"{
        "figma_data": {
            "componentName": "Badge",
            "properties": {
                "Size": "L 24px",
                "Emphasis": "High",
                "Color": "Grey",
                "Icon": "true",
                "Label": "Badge"
            },
            "text": "Badge",
            "icon": {"name": "star", "type": "solid"}
        }
    }"#;

    #[test]
    fn blank_values() {
        assert!(is_blank(&json!(null)));
        assert!(is_blank(&json!(false)));
        assert!(is_blank(&json!("  ")));
        assert!(is_blank(&json!({})));
        assert!(is_blank(&json!([])));
        assert!(!is_blank(&json!("x")));
        assert!(!is_blank(&json!(0)));
    }

    #[tokio::test]
    async fn maps_badge_to_rails() {
        let (status, body) = post_json("/map-figma-to-rails", BADGE_REQUEST).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["component_name"], json!("badge"));
        assert_eq!(
            body["rails_props"],
            json!({
                "size": "large",
                "emphasized": "true",
                "color": "neutral",
                "icon": "star",
                "text": "Badge",
                "icon_type": "solid"
            })
        );
        assert_eq!(
            body["rails_code"],
            json!(r#"render Vue::BadgeComponent.new(size: "large", emphasized: "true", color: "neutral", icon: "star", text: "Badge", icon_type: "solid")"#)
        );
        assert_eq!(body["figma_data"]["componentName"], json!("Badge"));
    }

    #[tokio::test]
    async fn maps_badge_to_vue() {
        let (status, body) = post_json("/map-figma-to-vue", BADGE_REQUEST).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["vue_props"]["iconType"], json!("solid"));
        assert_eq!(
            body["vue_code"],
            json!(r#"<PfBadge size="large" emphasized color="neutral" icon="star" iconType="solid">Badge</PfBadge>"#)
        );
    }

    #[tokio::test]
    async fn missing_figma_data_is_400() {
        for request in ["{}", r#"{"figma_data": null}"#, r#"{"figma_data": {}}"#, "not json", ""] {
            let (status, body) = post_json("/map-figma-to-rails", request).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "request {request:?}");
            assert_eq!(body["error"], json!("Figma data is required"));
        }
    }

    #[tokio::test]
    async fn unknown_component_is_404() {
        let (status, body) = post_json(
            "/map-figma-to-rails",
            r#"{"figma_data": {"componentName": "Carousel"}}"#,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Rails component not found"));
        assert_eq!(body["component_name"], json!("carousel"));
        assert!(!body["available_components"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rails_only_component_is_not_found_for_vue() {
        let (status, body) = post_json(
            "/map-figma-to-vue",
            r#"{"figma_data": {"componentName": "Tab Bar Primary"}}"#,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], json!("Vue component not found"));
    }

    #[tokio::test]
    async fn malformed_figma_data_is_422() {
        let (status, body) = post_json(
            "/map-figma-to-rails",
            r#"{"figma_data": {"componentName": "Badge", "icon": "star"}}"#,
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["component_name"], json!("badge"));
        assert!(body["error"].as_str().unwrap().starts_with("Mapping failed: "));
    }
}
