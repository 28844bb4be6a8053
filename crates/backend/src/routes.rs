use std::sync::Arc;

use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::domain::a001_locker_master::repository::LockerStore;
use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes(store: Arc<LockerStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    // Данные ячеек доступны только с токеном
    let lockers = Router::new()
        .route(
            "/lockers/locker-master",
            get(handlers::a001_locker_master::get_locker_master),
        )
        .route(
            "/lockers/locker-details",
            get(handlers::a001_locker_master::get_locker_details),
        )
        .route_layer(middleware::from_fn(system::auth::middleware::require_token))
        .with_state(store);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/logs",
            get(handlers::logs::list_all)
                .post(handlers::logs::create)
                .delete(handlers::logs::clear_all),
        )
        .merge(lockers)
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        configure_routes(Arc::new(LockerStore::demo().unwrap()))
    }

    async fn get(uri: &str, token: Option<&str>) -> Response {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = get("/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_locker_master_requires_token() {
        let response = get("/lockers/locker-master?lockerCenterId=7", None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = get("/lockers/locker-master?lockerCenterId=7", Some("  ")).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_locker_master_keeps_wire_names() {
        let response = get("/lockers/locker-master?lockerCenterId=7", Some("t0ken")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let room = &json["master"][0]["rooms"][0];
        assert_eq!(room["room_id"], 1);
        assert_eq!(room["cabinates"].as_array().unwrap().len(), 2);
        assert_eq!(room["cabinates"][0]["size"][1]["size"], "Medium");
        assert_eq!(json["mappedLockers"][0]["locker_name"], "R-01");
        assert_eq!(json["mappedLockers"][0]["status"], "occupied");
    }

    #[tokio::test]
    async fn test_locker_master_bad_requests() {
        let response = get("/lockers/locker-master", Some("t0ken")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = get("/lockers/locker-master?lockerCenterId=abc", Some("t0ken")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = get("/lockers/locker-master?lockerCenterId=999", Some("t0ken")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_locker_details() {
        let response = get("/lockers/locker-details?customer_id=1001", Some("t0ken")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["locker_center_id"], 7);
        assert_eq!(json["locker_id"], 99);
        assert_eq!(json["size"], "Medium");

        let response = get("/lockers/locker-details?customer_id=5", Some("t0ken")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_client_log_is_recorded() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/logs")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"source":"client","category":"locker_assignment","message":"route test entry"}"#,
            ))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(get("/api/logs", None).await).await;
        let found = json
            .as_array()
            .unwrap()
            .iter()
            .any(|e| e["message"] == "route test entry" && e["source"] == "client");
        assert!(found);
    }
}
