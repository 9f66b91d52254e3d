//! # HTTP Flows
//!
//! Drives the router built by `rewards-node` exactly as the binary wires it:
//! in-memory store → rewards service → gateway.

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use rr_02_api_gateway::GatewayConfig;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::fixtures::SAMPLE_RECEIPTS;

    // =============================================================================
    // TEST HELPERS
    // =============================================================================

    fn app() -> (Router, Router) {
        let gateway = rewards_node::build_gateway(GatewayConfig::default()).unwrap();
        (gateway.http_router(), gateway.admin_router())
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn process(app: &Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    async fn points(app: &Router, id: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(format!("/receipts/{id}/points"))
            .body(Body::empty())
            .unwrap();
        send(app, request).await
    }

    async fn process_ok(app: &Router, body: &str) -> String {
        let (status, body) = process(app, body).await;
        assert_eq!(status, StatusCode::OK, "body: {body}");
        body["id"].as_str().unwrap().to_string()
    }

    const VALID: &str = r#"{
        "retailer": "Target",
        "purchaseDate": "2023-09-15",
        "purchaseTime": "14:30",
        "total": "35.50",
        "items": [
            {"shortDescription": "Apples", "price": "3.50"},
            {"shortDescription": "Bananas", "price": "2.00"}
        ]
    }"#;

    // =============================================================================
    // SUBMIT + LOOKUP
    // =============================================================================

    #[tokio::test]
    async fn test_sample_receipts_score_as_documented() {
        let (app, _) = app();

        for (name, json, expected) in SAMPLE_RECEIPTS {
            let id = process_ok(&app, json).await;
            let (status, body) = points(&app, &id).await;
            assert_eq!(status, StatusCode::OK, "{name}");
            assert_eq!(body, json!({ "points": expected }), "{name}");
        }
    }

    #[tokio::test]
    async fn test_valid_receipt_then_lookup() {
        let (app, _) = app();

        let id = process_ok(&app, VALID).await;
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

        let (status, body) = points(&app, &id).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["points"], 53);
    }

    #[tokio::test]
    async fn test_resubmission_keeps_id_and_points() {
        let (app, admin) = app();

        let first = process_ok(&app, VALID).await;
        let second = process_ok(&app, VALID).await;
        assert_eq!(first, second);
        assert_eq!(points(&app, &first).await.1["points"], 53);

        let metrics = Request::builder()
            .uri("/metrics")
            .body(Body::empty())
            .unwrap();
        let (_, snapshot) = send(&admin, metrics).await;
        assert_eq!(snapshot["receipts"]["processed"], 2);
        assert_eq!(snapshot["receipts"]["scored"], 1);
    }

    #[tokio::test]
    async fn test_layout_and_key_order_do_not_change_id() {
        let (app, _) = app();

        let compact = serde_json::to_string(&serde_json::from_str::<Value>(VALID).unwrap()).unwrap();
        let reordered = r#"{"items":[{"price":"3.50","shortDescription":"Apples"},{"price":"2.00","shortDescription":"Bananas"}],"total":"35.50","purchaseTime":"14:30","purchaseDate":"2023-09-15","retailer":"Target"}"#;

        let a = process_ok(&app, VALID).await;
        let b = process_ok(&app, &compact).await;
        let c = process_ok(&app, reordered).await;
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[tokio::test]
    async fn test_description_whitespace_changes_id_not_points() {
        let (app, _) = app();

        let padded = VALID.replace("\"Apples\"", "\"  Apples \"");
        let a = process_ok(&app, VALID).await;
        let b = process_ok(&app, &padded).await;

        assert_ne!(a, b);
        assert_eq!(points(&app, &a).await.1, points(&app, &b).await.1);
    }

    // =============================================================================
    // REJECTIONS
    // =============================================================================

    #[tokio::test]
    async fn test_missing_purchase_time_and_no_items() {
        let (app, admin) = app();
        let payload = r#"{
            "retailer": "Target",
            "purchaseDate": "2023-09-15",
            "total": "35.50",
            "items": []
        }"#;

        let (status, body) = process(&app, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"BadRequest": "The receipt is invalid."}));

        let metrics = Request::builder()
            .uri("/metrics")
            .body(Body::empty())
            .unwrap();
        let (_, snapshot) = send(&admin, metrics).await;
        assert_eq!(snapshot["requests"]["client_errors"], 1);
        assert_eq!(snapshot["receipts"]["scored"], 0);
    }

    #[tokio::test]
    async fn test_invalid_id_not_found() {
        let (app, _) = app();

        let (status, body) = points(&app, "invalid-id").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"NotFound": "No receipt found for that ID"}));
    }

    #[tokio::test]
    async fn test_uppercase_id_not_found() {
        let (app, _) = app();

        let id = process_ok(&app, VALID).await;
        let (status, _) = points(&app, &id.to_uppercase()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_usage_lists_sample_commands() {
        let (app, _) = app();
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        let post = body["commands"]["POST"].as_array().unwrap();
        for ((name, _, _), command) in SAMPLE_RECEIPTS.iter().zip(post) {
            assert!(command["example"].as_str().unwrap().contains(name));
        }
    }
}
