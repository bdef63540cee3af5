// src/main.rs
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weebapi::application::{
    ports::{sentiment::SentimentScorer, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use weebapi::config::AppConfig;
use weebapi::domain::{
    message::MessageRepository,
    post::{PostReadRepository, PostWriteRepository},
};
use weebapi::infrastructure::{
    database,
    repositories::{
        PostgresMessageRepository, PostgresPostReadRepository, PostgresPostWriteRepository,
    },
    sentiment::LinearSentimentModel,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use weebapi::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %format!("{err:#}"), "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    // Scoring without a model is not an option; refuse to start instead.
    let model = LinearSentimentModel::load(config.sentiment_model_path())
        .context("loading sentiment model")?;
    let scorer: Arc<dyn SentimentScorer> = Arc::new(model);

    let pool = database::init_pool(config.database_url())
        .await
        .context("connecting to database")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let post_write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(PostgresPostWriteRepository::new(pool.clone()));
    let post_read_repo: Arc<dyn PostReadRepository> =
        Arc::new(PostgresPostReadRepository::new(pool.clone()));
    let message_repo: Arc<dyn MessageRepository> =
        Arc::new(PostgresMessageRepository::new(pool.clone()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        post_write_repo,
        post_read_repo,
        message_repo,
        scorer,
        clock,
        slugger,
        config.slug_max_attempts(),
    ));

    let state = HttpState { services };
    let app = build_router_with_rate_limiter(state, config.rate_limit_enabled());

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        %address,
        slug_max_attempts = config.slug_max_attempts(),
        rate_limit = config.rate_limit_enabled(),
        "listening"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
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
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
