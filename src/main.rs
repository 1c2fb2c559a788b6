use parish_catalog::server::{self, config::Config, startup};

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

    if let Err(e) = serve(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), server::error::Error> {
    let state = startup::build_app_state(&config).await?;
    let router = server::router::routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, router).await?;

    Ok(())
}
