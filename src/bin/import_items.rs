//! Import cataloged items from the assistant conversation table into `catalog_item`.
//!
//! Set `DRY_RUN=true` to produce the report without writing to the catalog.

use parish_catalog::server::{
    config::Config, error::Error, service::import::ImportService, startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Import failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    let reference = startup::load_reference(&config).await?;
    let reference = reference.snapshot().await;

    let import_service = ImportService::new(&db, &reference, config.dry_run);
    let report = import_service.run().await?;

    report.write(&config.import_report_path).await?;

    tracing::info!(
        "Import finished (dry run: {}): {} migrated, {} skipped, report written to {}",
        report.dry_run,
        report.migrated_count,
        report.skipped_count,
        config.import_report_path.display()
    );

    Ok(())
}
