mod common;
mod http_client;
mod model;
mod relay;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use model::arg::Args;
use model::config::{Config, GITHUB_PAT_ENV};
use relay::{IssueClient, RelayState, create_relay_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // .env 可选，加载失败不影响启动
    let dotenv_path = dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Some(path) = &dotenv_path {
        tracing::debug!("已加载环境文件: {}", path.display());
    }

    let config_path = args
        .config
        .unwrap_or_else(|| Config::default_config_path().to_string());
    let config = Config::load(&config_path).context("加载配置失败")?;
    if let Some(path) = config.config_path().filter(|p| p.exists()) {
        tracing::info!("已加载配置文件: {}", path.display());
    } else {
        tracing::info!("配置文件 {} 不存在，使用默认配置", config_path);
    }

    // 凭据只在启动时解析一次，之后随状态注入处理器
    let token = config.effective_github_token(std::env::var(GITHUB_PAT_ENV).ok());
    let issues = IssueClient::from_config(&config, token).context("创建上游客户端失败")?;
    if !issues.has_credential() {
        tracing::warn!(
            "未配置 GitHub 凭据（githubToken 或 {} 环境变量），提交请求将返回 500",
            GITHUB_PAT_ENV
        );
    }
    tracing::info!(
        "转发目标: {}（超时 {}s）",
        issues.issues_url(),
        config.upstream_timeout_secs
    );

    let app = create_relay_router(RelayState::new(issues), config.max_body_bytes);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("绑定监听地址失败: {}", addr))?;
    tracing::info!("Issue 中继服务已启动: http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP 服务异常退出")?;

    tracing::info!("服务已停止");
    Ok(())
}

/// 等待 Ctrl-C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("监听 Ctrl-C 失败: {}", e);
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
                tracing::warn!("监听 SIGTERM 失败: {}", e);
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
    tracing::info!("收到停止信号，正在关闭");
}
