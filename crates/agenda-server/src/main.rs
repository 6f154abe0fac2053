mod config;

use agenda_event::{setup_schema, EventService};
use agenda_event_api::{create_router, AppState};
use clap::Parser;
use sea_orm::Database;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let app_config = config::AppConfig::load(&args.config)?;

    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&app_config.logging.level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Agenda Event Server with config: {}", args.config);

    // 连接数据库并准备表结构
    let db = Database::connect(&app_config.database.url).await?;
    setup_schema(&db).await?;

    // 创建活动服务
    let event_service = Arc::new(EventService::new(Arc::new(db)));
    let state = AppState::new(event_service);
    let app = create_router(state);

    // 启动服务器
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
