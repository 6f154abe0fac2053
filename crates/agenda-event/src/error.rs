use thiserror::Error;

/// 活动管理错误类型
#[derive(Error, Debug)]
pub enum EventError {
    /// 活动未找到
    #[error("Event id {0} not found.")]
    NotFound(i64),

    /// 数据库错误
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    /// 其他错误
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// 活动管理结果类型
pub type Result<T> = std::result::Result<T, EventError>;
