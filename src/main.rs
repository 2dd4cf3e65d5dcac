use lightbnb::{config::Config, db::init_db, Fixtures, Repository};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
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

    if let Err(e) = run(&config).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Bootstrap the schema and load fixtures, then release the pool.
async fn run(config: &Config) -> anyhow::Result<()> {
    let pool = init_db(config).await?;
    let repo = Repository::new(pool);

    let outcome = seed_fixtures(&repo, config).await;
    repo.close().await;
    outcome
}

async fn seed_fixtures(repo: &Repository, config: &Config) -> anyhow::Result<()> {
    let Some(path) = &config.fixtures_path else {
        tracing::info!("FIXTURES_PATH not set, skipping seed");
        return Ok(());
    };

    let fixtures = Fixtures::from_path(path)?;
    repo.seed(&fixtures).await?;
    Ok(())
}
