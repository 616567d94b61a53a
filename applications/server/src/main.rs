/// Gigbook Server - venue and artist booking site
use clap::{Parser, Subcommand};
use gigbook_server::{config::ServerConfig, create_router, state::AppState};
use gigbook_storage::{seed, Database};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gigbook-server")]
#[command(about = "Gigbook venue and artist booking server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./gigbook.toml when present)
    #[arg(short, long, global = true, env = "GIGBOOK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
    /// Load the sample venues, artists and shows into an empty database
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gigbook_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::Migrate => migrate(&config).await?,
        Commands::Seed => load_seed(&config).await?,
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Gigbook Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let db = Database::open(&config.storage.database_url, config.storage.max_connections).await?;
    tracing::info!("Database connected");

    let app_state = AppState::new(Arc::new(db));
    let app = create_router(app_state, &config.server.static_dir);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn migrate(config: &ServerConfig) -> anyhow::Result<()> {
    let pool = gigbook_storage::create_pool(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    gigbook_storage::run_migrations(&pool).await?;

    println!("Migrations applied to {}", config.storage.database_url);
    Ok(())
}

async fn load_seed(config: &ServerConfig) -> anyhow::Result<()> {
    let db = Database::open(&config.storage.database_url, config.storage.max_connections).await?;

    let mut session = db.begin_write().await?;
    let report = seed::load_sample_data(&mut session).await?;
    session.commit().await?;

    if report == seed::SeedReport::default() {
        println!("Database already has venues; nothing seeded");
    } else {
        println!(
            "Seeded {} venues, {} artists and {} shows",
            report.venues, report.artists, report.shows
        );
    }

    Ok(())
}
