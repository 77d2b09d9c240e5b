use glizzy_api::application::{
    ports::{
        time::Clock,
        util::{Slugifier, TokenGenerator},
    },
    services::ApplicationServices,
};
use glizzy_api::config::AppConfig;
use glizzy_api::domain::catalog::{EmojiRepository, GlizzyRepository, SlugProbe};
use glizzy_api::infrastructure::{
    database,
    repositories::{PostgresEmojiRepository, PostgresGlizzyRepository},
    time::SystemClock,
    util::{AlphanumericTokenGenerator, DefaultSlugifier},
};
use glizzy_api::presentation::graphql::build_schema;
use glizzy_api::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(profile = ?config.profile(), "starting glizzy_api");

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let emoji_repo_impl = Arc::new(PostgresEmojiRepository::new(pool.clone()));
    let glizzy_repo_impl = Arc::new(PostgresGlizzyRepository::new(pool.clone()));

    let emoji_repo: Arc<dyn EmojiRepository> = emoji_repo_impl.clone();
    let emoji_slug_probe: Arc<dyn SlugProbe> = emoji_repo_impl;
    let glizzy_repo: Arc<dyn GlizzyRepository> = glizzy_repo_impl.clone();
    let glizzy_slug_probe: Arc<dyn SlugProbe> = glizzy_repo_impl;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugifier: Arc<dyn Slugifier> = Arc::new(DefaultSlugifier);
    let tokens: Arc<dyn TokenGenerator> = Arc::new(AlphanumericTokenGenerator);

    let services = Arc::new(ApplicationServices::new(
        emoji_repo,
        emoji_slug_probe,
        glizzy_repo,
        glizzy_slug_probe,
        clock,
        slugifier,
        tokens,
    ));

    let schema = build_schema(Arc::clone(&services));

    let state = HttpState {
        services,
        schema,
        media_url: config.media_url().to_string(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
