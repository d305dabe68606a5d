// src/main.rs

use axum::serve;
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use tg_ads_dash::api::{self, AppState};
use tg_ads_dash::config::ConfigManager;
use tg_ads_dash::fetcher::AdsClient;

#[derive(Parser)]
#[command(author = "whiteCcinn", version = "1.0", about = "Telegram Ads statistics server")]
struct CliArgs {
    #[arg(short, long, env = "ADS_PORT", default_value_t = 8080)]
    port: u16,
    #[arg(long, env = "ADS_LOG_DIR", default_value = "logs")]
    log_dir: String,
    #[arg(long, env = "TG_ADS_API_URL", default_value = "https://ads.telegram.org/api")]
    api_url: String,
    #[arg(long, env = "TG_ADS_API_HASH", hide_env_values = true)]
    api_hash: String,
    #[arg(long, env = "TG_ADS_OWNER_ID")]
    owner_id: String,
    #[arg(long, env = "TG_ADS_COOKIE", hide_env_values = true)]
    cookie: String,
    #[arg(long, env = "TG_ADS_CUTOFF")]
    cutoff: Option<i64>,
    #[arg(long, env = "TG_ADS_CUTOFF_DAYS")]
    cutoff_days: Option<u32>,
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    // 初始化全局 tracing 日志：JSON 文件按小时滚动，同时输出到控制台
    let log_file = rolling::hourly(&args.log_dir, "ads_log.json");
    let (non_blocking, _guard) = tracing_appender::non_blocking(log_file);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer().json().with_writer(non_blocking))
        .with(fmt::layer().with_target(false));
    tracing::subscriber::set_global_default(subscriber)
        .expect("Unable to set global tracing subscriber");

    let cutoff = ConfigManager::cutoff_from_args(args.cutoff, args.cutoff_days);
    let config = Arc::new(ConfigManager::new(
        &args.api_url,
        &args.api_hash,
        &args.owner_id,
        &args.cookie,
        cutoff,
    ));
    info!(config = ?config, "ads server starting on port {}", args.port);

    let state = Arc::new(AppState {
        ads_client: Arc::new(AdsClient::new(config.clone())),
        config,
    });

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };
    info!("ads server running at http://{}", addr);

    let app = api::router(state);
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
        }
        info!("Shutting down gracefully...");
    };
    if let Err(e) = serve(listener, app).with_graceful_shutdown(shutdown).await {
        error!("ads server stopped with error: {}", e);
    }
    info!("ads server shut down.");
}
