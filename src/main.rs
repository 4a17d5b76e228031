use gamehub::{config::Config, model::app::AppState, router, scheduler::Scheduler, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gamehub=info,tower_http=info".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), gamehub::error::Error> {
    let steam_client = startup::build_steam_client(&config)?;
    let db = startup::connect_to_database(&config).await?;

    let scheduler = Scheduler::new(db.clone(), steam_client.clone(), config.cache.clone()).await?;
    scheduler.start().await?;

    let state = AppState {
        db,
        steam_client,
        cache: config.cache,
    };

    let router = router::routes().with_state(state);

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!("Starting server on {}", address);

    axum::serve(listener, router).await?;

    Ok(())
}
