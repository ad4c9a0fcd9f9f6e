//! CRM API server.

use crm_api::{apply_migrations, app, connect, connect_options, ensure_database_exists, from_env, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("crm_api=info,tower_http=info")),
        )
        .init();

    let settings = from_env()?;
    ensure_database_exists(&connect_options(&settings.database)?).await?;
    let store = connect(&settings.database).await?;
    apply_migrations(store.pool()).await?;
    tracing::info!(max_connections = settings.database.max_connections, "database pool ready");

    let router = app(AppState::new(store.clone()), &settings.server);
    let listener = TcpListener::bind(settings.server.listen_addr()).await?;
    tracing::info!("CRM API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.pool().close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
