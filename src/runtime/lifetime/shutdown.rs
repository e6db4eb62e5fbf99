use tokio::signal;
use tracing::warn;

/// 阻塞等待 Ctrl+C，收到信号后由 main 侧结束服务
pub async fn listen_for_shutdown() {
    signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    warn!("Ctrl+C received, stopping the SIAKAD server...");
}
