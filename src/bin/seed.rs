//! Populate the configured database with synthetic CRM data.

use crm_api::seed::{seed, SeedPlan};
use crm_api::{apply_migrations, connect, connect_options, ensure_database_exists, from_env};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("crm_api=info")),
        )
        .init();

    let settings = from_env()?;
    let plan = SeedPlan::from_lookup(|key| std::env::var(key).ok())?;

    ensure_database_exists(&connect_options(&settings.database)?).await?;
    let store = connect(&settings.database).await?;
    apply_migrations(store.pool()).await?;

    let report = seed(&store, plan).await?;
    tracing::info!(
        accounts = report.accounts,
        contacts = report.contacts,
        emails = report.emails,
        "seeding done"
    );
    store.pool().close().await;
    Ok(())
}
