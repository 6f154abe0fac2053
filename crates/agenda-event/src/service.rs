use crate::model::{Event, EventInput};
use crate::store::EventStore;
use crate::{mapper, EventError, Result};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::info;

/// 活动服务
///
/// 业务规则的唯一入口：创建、查询、更新与删除都经由这里，
/// "不存在即报错" 的判定只在本层发生。
pub struct EventService {
    /// 活动存储
    store: EventStore,
}

impl EventService {
    /// 创建新的活动服务
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            store: EventStore::new(db),
        }
    }

    /// 创建活动
    ///
    /// 输入中的 ID 被忽略，返回带生成 ID 的持久化记录。
    pub async fn save(&self, input: EventInput) -> Result<Event> {
        let event = mapper::to_event(input);
        let saved = self.store.save(event).await?;

        info!(event_id = ?saved.id, event_name = %saved.name, "Event created");
        Ok(saved)
    }

    /// 查询全部活动
    pub async fn find_all(&self) -> Result<Vec<Event>> {
        self.store.find_all().await
    }

    /// 按 ID 查询活动
    ///
    /// # 错误
    /// * `NotFound` - 活动不存在
    pub async fn find_by_id(&self, id: i64) -> Result<Event> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id))
    }

    /// 更新活动
    ///
    /// 加载既有记录后逐字段套用输入，None 字段保留原值。
    ///
    /// # 错误
    /// * `NotFound` - 活动不存在
    pub async fn update(&self, id: i64, input: EventInput) -> Result<Event> {
        let existing = self.find_by_id(id).await?;
        let merged = mapper::apply(input, existing);
        let updated = self.store.save(merged).await?;

        info!(event_id = id, "Event updated");
        Ok(updated)
    }

    /// 删除活动
    ///
    /// # 错误
    /// * `NotFound` - 活动不存在
    pub async fn delete(&self, id: i64) -> Result<()> {
        let event = self.find_by_id(id).await?;
        self.store.delete(&event).await
    }
}
