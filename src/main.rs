use tokio::net::TcpListener;
use tracing::{error, info};

use users_service::{
    app::users::service::PgUserRepository,
    cors_layer, create_router,
    infrastructure::{config::AppConfig, database::DatabaseManager, logger::Logger},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    Logger::init(&config.log_level);

    info!("启动用户服务...");

    let db = DatabaseManager::new(&config.database).await.map_err(|e| {
        error!("Unable to connect to the database: {}", e);
        e
    })?;

    let state = AppState::new(PgUserRepository::new(db.get_pool().clone()));
    let app = create_router(state, cors_layer(&config.cors_origin)?);

    let listener = TcpListener::bind(config.listen_addr()).await?;
    info!("🚀 用户服务运行在 http://{}", listener.local_addr()?);
    info!("   允许的跨域来源: {}", config.cors_origin);
    info!("   GET    /users        - 用户列表 (?page=1&limit=10&search=term)");
    info!("   POST   /users        - 创建用户");
    info!("   PUT    /users/:id    - 更新用户");
    info!("   DELETE /users/:id    - 删除用户");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("无法监听退出信号: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到退出信号，正在关闭...");
}
