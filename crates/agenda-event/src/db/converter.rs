use crate::model::Event;
use sea_orm::ActiveValue::{NotSet, Set};

/// Event 模型与数据库实体的转换
impl From<Event> for super::entity::ActiveModel {
    fn from(event: Event) -> Self {
        Self {
            // 无 ID 时交由数据库自增分配
            id: match event.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            name: Set(event.name),
            description: Set(event.description),
            date: Set(event.date),
        }
    }
}

impl From<super::entity::Model> for Event {
    fn from(model: super::entity::Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            date: model.date,
        }
    }
}
