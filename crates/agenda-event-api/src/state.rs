use agenda_event::EventService;
use std::sync::Arc;

/// API 应用状态
#[derive(Clone)]
pub struct AppState {
    /// 活动服务
    pub event_service: Arc<EventService>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(event_service: Arc<EventService>) -> Self {
        Self { event_service }
    }
}
