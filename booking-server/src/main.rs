use booking_server::{Server, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 工作目录, 日志)
    let config = setup_environment()?;

    // 打印横幅
    print_banner();

    tracing::info!(
        environment = %config.environment,
        database = %config.database_path,
        "Booking server starting..."
    );

    // 2. 启动 HTTP 服务器 (状态在 run 中初始化)
    let server = Server::new(config);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
