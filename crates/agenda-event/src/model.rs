use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 活动信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// 活动 ID（由存储层生成，持久化前为 None）
    pub id: Option<i64>,

    /// 活动名称
    pub name: String,

    /// 活动描述
    pub description: String,

    /// 活动时间（分钟精度，见 [`datetime_minute`]）
    #[serde(default, with = "datetime_minute::option")]
    pub date: Option<NaiveDateTime>,
}

impl Event {
    /// 创建新活动（ID 由存储层在插入时分配）
    pub fn new(name: String, description: String, date: NaiveDateTime) -> Self {
        Self {
            id: None,
            name,
            description,
            date: Some(date),
        }
    }
}

/// 活动写入输入
///
/// 创建与更新共用的输入结构。更新时为 None 的字段保留原值，
/// `id` 字段在写入路径上始终被忽略（ID 由存储层分配且不可变）。
#[derive(Debug, Clone, Default)]
pub struct EventInput {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDateTime>,
}

/// 分钟精度的时间序列化格式（`yyyy-MM-ddTHH:mm`）
pub mod datetime_minute {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M";

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&value, FORMAT).map_err(serde::de::Error::custom)
    }

    /// `Option<NaiveDateTime>` 版本
    pub mod option {
        use chrono::NaiveDateTime;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(date: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match date {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                Some(value) => NaiveDateTime::parse_from_str(&value, super::FORMAT)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
                None => Ok(None),
            }
        }
    }
}
