use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, data::image::ImageStore, error::Error, model::app::AppState,
    service::parish::reference::ReferenceStore,
};

/// Install the `tracing` subscriber, filtered by `RUST_LOG` and defaulting to `info`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Load the parish reference catalog and manual aliases
pub async fn load_reference(config: &Config) -> Result<ReferenceStore, Error> {
    let store = ReferenceStore::load(config.reference.clone()).await?;
    let summary = store.snapshot().await.summary();

    tracing::info!(
        "Loaded parish reference data: {} catalog entries, {} aliases",
        summary.catalog_entries,
        summary.aliases
    );

    Ok(store)
}

/// Connect to the database, load reference data and assemble the application state
pub async fn build_app_state(config: &Config) -> Result<AppState, Error> {
    let db = connect_to_database(config).await?;
    let reference = load_reference(config).await?;

    Ok(AppState {
        db,
        reference,
        inventory: config.inventory,
        images: ImageStore::new(config.image_storage_dir.clone()),
        default_diocese: config.default_diocese.clone(),
    })
}
