pub mod health;

use axum::{
    http::Uri,
    routing::get,
    Router,
};

use crate::errors::AppError;
use crate::planning::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/plan",
            get(handlers::handle_get_plan).post(handlers::handle_create_plan),
        )
        .route("/api/subjects", get(handlers::handle_list_subjects))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::planning::assembler::PlanAssembler;
    use crate::planning::templates::TemplateCatalog;
    use crate::resources::{
        ResourceError, ResourceProvider, ResourceQuery, ResourceSet,
    };

    struct UnavailableResources;

    #[async_trait]
    impl ResourceProvider for UnavailableResources {
        async fn fetch(&self, _query: &ResourceQuery) -> Result<ResourceSet, ResourceError> {
            Err(ResourceError::Status {
                status: 503,
                message: "unavailable".to_string(),
            })
        }

        fn backend(&self) -> &'static str {
            "unavailable"
        }
    }

    fn app() -> Router {
        let config = Config {
            port: 0,
            topic_templates_path: None,
            resource_service_url: None,
            rust_log: "info".to_string(),
        };
        build_router(AppState::from_config(&config).unwrap())
    }

    async fn get_uri(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> Response {
        app.oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 1_048_576)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = get_uri(app(), "/api/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "OK");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_get_plan_with_timeframe() {
        let response = get_uri(
            app(),
            "/api/plan?subject=Python&level=Advanced&timeframe=30%20days",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["subject"], "Python");
        assert_eq!(json["level"], "Advanced");
        assert_eq!(json["totalDays"], 30);
        assert_eq!(json["timeframe"], "30 days");
        assert_eq!(json["plan"].as_array().unwrap().len(), 30);
        assert!(json["plan"][0].as_str().unwrap().starts_with("Day 1: "));
        assert_eq!(json["resources"][0]["type"], "search");
    }

    #[tokio::test]
    async fn test_get_plan_without_timeframe_defaults_to_a_week() {
        let response = get_uri(app(), "/api/plan?subject=Math&level=Advanced").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["totalDays"], 7);
        assert_eq!(
            json["plan"][0],
            "Day 1: Advanced calculus - integration techniques"
        );
    }

    #[tokio::test]
    async fn test_get_plan_requires_subject_and_level() {
        for uri in [
            "/api/plan?subject=Math",
            "/api/plan?level=Beginner",
            "/api/plan?subject=%20%20&level=Beginner",
            "/api/plan",
        ] {
            let response = get_uri(app(), uri).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            let json = body_json(response).await;
            assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_post_plan_accepts_numeric_timeframe() {
        let response = post_json(
            app(),
            "/api/plan",
            json!({ "subject": "React", "level": "Intermediate", "timeframe": 10 }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["totalDays"], 10);
        assert_eq!(json["plan"][9], "Day 10: Forms at scale");
    }

    #[tokio::test]
    async fn test_post_plan_without_timeframe_uses_level_default() {
        let response = post_json(
            app(),
            "/api/plan",
            json!({ "subject": "Rust", "level": "Advanced" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["totalDays"], 21);
        assert_eq!(json["plan"][0], "Day 1: Introduction to Rust");
        assert_eq!(
            json["plan"][14],
            "Day 15: Practice and review - Introduction to Rust (Cycle 2)"
        );
    }

    #[tokio::test]
    async fn test_post_plan_invalid_timeframe_falls_back() {
        let response = post_json(
            app(),
            "/api/plan",
            json!({ "subject": "CSS", "level": "Intermediate", "timeframe": "forever" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["totalDays"], 14);
    }

    #[tokio::test]
    async fn test_post_plan_non_scalar_timeframe_falls_back() {
        for timeframe in [json!(true), json!([10]), json!({ "days": 10 })] {
            let response = post_json(
                app(),
                "/api/plan",
                json!({ "subject": "Math", "level": "Advanced", "timeframe": timeframe }),
            )
            .await;
            assert_eq!(response.status(), StatusCode::OK, "{timeframe}");
            let json = body_json(response).await;
            assert_eq!(json["totalDays"], 21, "{timeframe}");
        }
    }

    #[tokio::test]
    async fn test_post_plan_malformed_body_uses_error_envelope() {
        let response = post_json(app(), "/api/plan", json!("not an object")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_post_plan_keeps_level_exact() {
        let response = post_json(
            app(),
            "/api/plan",
            json!({ "subject": "Math", "level": " Advanced" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["level"], " Advanced");
        assert_eq!(json["totalDays"], 7);
        assert_eq!(json["plan"][0], "Day 1: Introduction to Math");
    }

    #[tokio::test]
    async fn test_post_plan_requires_level() {
        let response = post_json(app(), "/api/plan", json!({ "subject": "CSS" })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_subjects() {
        let response = get_uri(app(), "/api/subjects").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let subjects = json.as_array().unwrap();
        assert_eq!(subjects.len(), 5);
        assert_eq!(subjects[0]["subject"], "CSS");
        assert_eq!(subjects[0]["levels"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = get_uri(app(), "/api/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_resource_failure_maps_to_bad_gateway() {
        let state = AppState {
            assembler: PlanAssembler::new(
                Arc::new(TemplateCatalog::builtin().unwrap()),
                Arc::new(UnavailableResources),
            ),
        };
        let response = get_uri(build_router(state), "/api/plan?subject=Math&level=Beginner").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "RESOURCE_ERROR");
    }
}
