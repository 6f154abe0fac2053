use crate::{handlers, state::AppState};
use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// 创建 API 路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // 健康检查
        .route("/health", get(health_check))
        // 活动管理 API
        .route("/api/v1/events", post(handlers::create_event))
        .route("/api/v1/events", get(handlers::list_events))
        .route("/api/v1/events/:id", get(handlers::get_event))
        .route("/api/v1/events/:id", put(handlers::update_event))
        .route("/api/v1/events/:id", patch(handlers::patch_event))
        .route("/api/v1/events/:id", delete(handlers::delete_event))
        // 添加中间件
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 健康检查
async fn health_check() -> &'static str {
    "OK"
}
