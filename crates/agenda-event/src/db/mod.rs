pub mod converter;
pub mod entity;

use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

/// 创建数据库表结构
///
/// 幂等操作，服务启动与集成测试共用。
pub async fn setup_schema(db: &DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut stmt = schema.create_table_from_entity(entity::Entity);
    stmt.if_not_exists();
    db.execute(builder.build(&stmt)).await?;

    tracing::info!("Database schema created");
    Ok(())
}
