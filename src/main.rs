use autolot::db::repo::Policy;
use autolot::{cli, config::Config, db::init_db, Repository};

#[tokio::main]
async fn main() {
    // Initialize tracing; keep the interactive console quiet unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize database and repository
    let pool = match init_db(&config.database_path).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    let repo = Repository::with_policy(pool, Policy::from(&config));

    // Run the menu loop
    if let Err(e) = cli::run(&repo).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
