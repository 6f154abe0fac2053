use crate::{
    error::{ApiError, Result},
    models::{EventRequest, EventResponse},
    state::AppState,
};
use axum::{
    extract::{OriginalUri, Path, State},
    http::{header, StatusCode},
    Json,
};
use tracing::{debug, info};

/// 创建活动
pub async fn create_event(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(req): Json<EventRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<EventResponse>)> {
    info!(name = ?req.name, "Creating event");

    let violations = req.validate(chrono::Local::now().naive_local());
    if !violations.is_empty() {
        return Err(ApiError::ValidationError(violations));
    }

    let event = state
        .event_service
        .save(req.into())
        .await
        .map_err(|err| ApiError::from_event_error(err, uri.path()))?;

    let id = event
        .id
        .ok_or_else(|| ApiError::InternalError("Inserted event has no id".to_string()))?;
    let location = format!("/api/v1/events/{}", id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(EventResponse::from(event)),
    ))
}

/// 列出全部活动
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<EventResponse>>> {
    debug!("Listing events");

    let events = state
        .event_service
        .find_all()
        .await
        .map_err(|err| ApiError::from_event_error(err, "/api/v1/events"))?;

    let data: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();
    Ok(Json(data))
}

/// 按 ID 获取活动
pub async fn get_event(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<Json<EventResponse>> {
    debug!(event_id = id, "Getting event");

    let event = state
        .event_service
        .find_by_id(id)
        .await
        .map_err(|err| ApiError::from_event_error(err, uri.path()))?;

    Ok(Json(EventResponse::from(event)))
}

/// 更新活动（整体提交，None 字段保留原值）
pub async fn update_event(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
    Json(req): Json<EventRequest>,
) -> Result<Json<EventResponse>> {
    info!(event_id = id, "Updating event");

    let violations = req.validate(chrono::Local::now().naive_local());
    if !violations.is_empty() {
        return Err(ApiError::ValidationError(violations));
    }

    let event = state
        .event_service
        .update(id, req.into())
        .await
        .map_err(|err| ApiError::from_event_error(err, uri.path()))?;

    Ok(Json(EventResponse::from(event)))
}

/// 部分更新活动
///
/// 与 PUT 走同一条更新路径，语义一致。
pub async fn patch_event(
    state: State<AppState>,
    uri: OriginalUri,
    id: Path<i64>,
    req: Json<EventRequest>,
) -> Result<Json<EventResponse>> {
    update_event(state, uri, id, req).await
}

/// 删除活动
pub async fn delete_event(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    info!(event_id = id, "Deleting event");

    state
        .event_service
        .delete(id)
        .await
        .map_err(|err| ApiError::from_event_error(err, uri.path()))?;

    Ok(StatusCode::NO_CONTENT)
}
