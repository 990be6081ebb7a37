use anyhow::Context;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let settings = circle_service::settings::load_settings().context("failed to load settings")?;
    circle_service::init_tracing(&settings);
    let port = settings.port.unwrap_or(3000);

    if settings.environment.as_deref() == Some("DEV") {
        debug!("Running in DEV environment");
    }

    let app = circle_service::setup_router(&settings)
        .await
        .context("failed to set up router")?;
    let listener = TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .with_context(|| format!("failed to bind port {port}"))?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
