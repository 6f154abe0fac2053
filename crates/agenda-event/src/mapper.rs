//! 输入与活动记录之间的字段映射。
//!
//! 无共享配置的纯函数：创建路径忽略输入中的 ID，
//! 更新路径对 None 字段保留原值（全量更新与部分更新共用同一条规则）。

use crate::model::{Event, EventInput};

/// 将输入转换为新活动
///
/// 输入中的 `id` 被忽略，ID 由存储层在插入时分配。
/// 名称与描述的存在性已在边界完成校验。
pub fn to_event(input: EventInput) -> Event {
    Event {
        id: None,
        name: input.name.unwrap_or_default(),
        description: input.description.unwrap_or_default(),
        date: input.date,
    }
}

/// 将输入套用到既有活动上
///
/// None 字段保留原值，`id` 始终保留既有值。
pub fn apply(input: EventInput, existing: Event) -> Event {
    Event {
        id: existing.id,
        name: input.name.unwrap_or(existing.name),
        description: input.description.unwrap_or(existing.description),
        date: input.date.or(existing.date),
    }
}
