use std::sync::Arc;

use clap::Parser;
use small_crm_web::utils::{logger, validation::Validate};
use small_crm_web::{router, AppConfig, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 載入 .env（PRIVATE_APP_ACCESS）
    dotenvy::dotenv().ok();

    let config = AppConfig::parse();

    logger::init_server_logger(config.verbose);

    tracing::info!("Starting small-crm-web");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let access_token = AppConfig::access_token_from_env();
    if access_token.is_none() {
        tracing::warn!(
            "PRIVATE_APP_ACCESS not set; serving empty views and skipping HubSpot writes"
        );
    }

    let state = Arc::new(ServerState::new(&config, access_token));
    let app = router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("✅ Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
