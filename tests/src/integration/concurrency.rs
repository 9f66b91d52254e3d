//! # Concurrent Submissions
//!
//! Many tasks share one gateway; the first score written for an ID is the
//! one every later lookup sees.

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use rr_02_api_gateway::GatewayConfig;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::fixtures::SAMPLE_RECEIPTS;

    async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_parallel_identical_submissions() {
        let gateway = rewards_node::build_gateway(GatewayConfig::default()).unwrap();
        let app = gateway.http_router();
        let (_, json, expected) = SAMPLE_RECEIPTS[1];

        let handles: Vec<_> = (0..32)
            .map(|_| tokio::spawn(call(app.clone(), post(json))))
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            let (status, body) = handle.await.unwrap();
            assert_eq!(status, StatusCode::OK);
            ids.push(body["id"].as_str().unwrap().to_string());
        }
        ids.dedup();
        assert_eq!(ids.len(), 1);

        let (_, body) = call(app, get(&format!("/receipts/{}/points", ids[0]))).await;
        assert_eq!(body["points"], expected);

        let (_, snapshot) = call(gateway.admin_router(), get("/metrics")).await;
        assert_eq!(snapshot["receipts"]["processed"], 32);
        assert_eq!(snapshot["receipts"]["scored"], 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_parallel_mixed_submissions_and_lookups() {
        let gateway = rewards_node::build_gateway(GatewayConfig::default()).unwrap();
        let app = gateway.http_router();

        let mut handles = Vec::new();
        for round in 0..8 {
            for (_, json, _) in SAMPLE_RECEIPTS {
                handles.push(tokio::spawn(call(app.clone(), post(json))));
            }
            // Interleave lookups that can never match
            handles.push(tokio::spawn(call(
                app.clone(),
                get(&format!("/receipts/{:064x}/points", round)),
            )));
        }

        let mut not_found = 0;
        for handle in handles {
            let (status, _) = handle.await.unwrap();
            if status == StatusCode::NOT_FOUND {
                not_found += 1;
            } else {
                assert_eq!(status, StatusCode::OK);
            }
        }
        assert_eq!(not_found, 8);

        let (_, snapshot) = call(gateway.admin_router(), get("/metrics")).await;
        assert_eq!(snapshot["receipts"]["scored"], SAMPLE_RECEIPTS.len());
        assert_eq!(snapshot["requests"]["total"], 8 * 5);
    }
}
