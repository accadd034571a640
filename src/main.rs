//! Students API - 学生信息 CRUD 服务

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use students_api::config::{load_config_from_path, print_config};
use students_api::infrastructure::http::{AppState, HttpServer, ServerConfig};
use students_api::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteStudentRepository,
};
use students_api::logging::init_logging;

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "students-api", version, about = "Students CRUD HTTP API")]
struct Cli {
    /// 配置文件路径（toml / yaml / json）
    #[arg(long, env = "CONFIG_PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config_from_path(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config.log);

    tracing::info!("Students API v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    tracing::info!(env = %config.env, "Storage initialized");

    let student_repo = Arc::new(SqliteStudentRepository::new(pool.clone()));

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let server = HttpServer::new(server_config, AppState::new(student_repo));

    server.run_with_shutdown(shutdown_signal()).await?;

    pool.close().await;
    tracing::info!("Server gracefully stopped");

    Ok(())
}

/// 等待 Ctrl-C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Received shutdown signal");
}
