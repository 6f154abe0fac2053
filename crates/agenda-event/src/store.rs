use crate::db::entity;
use crate::model::Event;
use crate::Result;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};
use std::sync::Arc;
use tracing::{debug, info};

/// 活动存储
///
/// 活动记录在关系表上的持久化访问，按 `id` 作为主键。
pub struct EventStore {
    /// 数据库连接
    pub(crate) db: Arc<DatabaseConnection>,
}

impl EventStore {
    /// 创建新的活动存储
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 查询全部活动
    ///
    /// 返回顺序不作保证。
    pub async fn find_all(&self) -> Result<Vec<Event>> {
        let models = entity::Entity::find().all(&*self.db).await?;
        debug!(count = models.len(), "Events loaded");
        Ok(models.into_iter().map(Event::from).collect())
    }

    /// 按 ID 查询活动
    ///
    /// 不存在时返回 None，不视为错误。
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>> {
        let model = entity::Entity::find_by_id(id).one(&*self.db).await?;

        if model.is_none() {
            debug!(event_id = id, "Event not found");
        }
        Ok(model.map(Event::from))
    }

    /// 保存活动
    ///
    /// 无 ID 时插入并返回带生成 ID 的记录，有 ID 时整行更新。
    pub async fn save(&self, event: Event) -> Result<Event> {
        let is_insert = event.id.is_none();
        let active_model: entity::ActiveModel = event.into();

        let model = if is_insert {
            active_model.insert(&*self.db).await?
        } else {
            active_model.update(&*self.db).await?
        };

        info!(event_id = model.id, inserted = is_insert, "Event saved");
        Ok(Event::from(model))
    }

    /// 删除活动
    ///
    /// 存储层幂等，存在性检查由调用方负责。
    pub async fn delete(&self, event: &Event) -> Result<()> {
        if let Some(id) = event.id {
            entity::Entity::delete_by_id(id).exec(&*self.db).await?;
            info!(event_id = id, "Event deleted");
        }
        Ok(())
    }
}
