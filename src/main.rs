//! Biblia - 经文语料与注释服务
//!
//! 启动流程：加载配置 -> 初始化日志 -> 读取数据构建快照 -> 启动 HTTP 服务

use std::sync::Arc;

use biblia::application::{ReloadLibrary, ReloadTrigger, SnapshotStore};
use biblia::config::{load_config, print_config, LogConfig};
use biblia::infrastructure::http::{AppState, HttpServer, ServerConfig};
use biblia::infrastructure::JsonFileSource;

/// 初始化日志（RUST_LOG 优先于配置）
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},biblia={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Biblia - 经文语料与注释服务");
    print_config(&config);

    // 数据源与快照
    let source = Arc::new(JsonFileSource::new(config.data.clone()));
    let store = Arc::new(SnapshotStore::default());
    let state = Arc::new(AppState::new(&config, source, store));

    let loaded = state
        .reload_handler
        .handle(ReloadLibrary {
            trigger: ReloadTrigger::Startup,
        })
        .await;
    if loaded.stats.books == 0 {
        tracing::warn!("No scripture loaded, serving an empty library");
    }

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
