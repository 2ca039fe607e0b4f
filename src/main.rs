use std::sync::Arc;

use anyhow::Result;

use template_upload::{
    LocalFileStorage, UploadProcessor, app, config::AppConfig, observability,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    observability::init()?;

    let config = AppConfig::from_env();
    let storage = Arc::new(LocalFileStorage::new(config.storage_root.clone()));
    let processor = UploadProcessor::new(storage);
    let router = app::build_router(processor, config.max_body_bytes);

    let tcp_listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!(
        address = %config.bind_address,
        storage_root = %config.storage_root.display(),
        "template upload server started"
    );

    axum::serve(tcp_listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}
