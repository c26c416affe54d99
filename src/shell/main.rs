use tracing_subscriber::{EnvFilter, fmt};

use mergington_activities::modules::activities::core::seed::seed_activities;
use mergington_activities::shell::config::AppConfig;
use mergington_activities::shell::http::router;
use mergington_activities::shell::seed::load_seed_file;
use mergington_activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let activities = match &config.seed_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading seed directory");
            load_seed_file(path)?
        }
        None => seed_activities(),
    };
    tracing::info!(activities = activities.len(), "directory ready");

    let app = router(AppState::in_memory(activities), &config.static_dir);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Activities API: http://{}/activities", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
