//! Inkgate server entry point.
//!
//! Wires configuration, the PostgreSQL pool, the payment and SMS
//! adapters and the axum router together, then serves until a shutdown
//! signal arrives.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use inkgate::adapters::http::{app_router, AppState};
use inkgate::adapters::postgres::{
    PostgresPostRepository, PostgresSubscriptionRepository, PostgresUserRepository,
};
use inkgate::adapters::sms::{ConsoleSmsSender, TwilioConfig, TwilioSmsSender};
use inkgate::adapters::stripe::{StripeConfig, StripePaymentAdapter};
use inkgate::config::{AppConfig, SmsProvider};
use inkgate::ports::SmsSender;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    info!("Starting inkgate");

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;
    info!(
        max_connections = config.database.max_connections,
        "Database pool initialized"
    );

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations completed");
    }

    let payment_provider = StripePaymentAdapter::new(
        StripeConfig::new(config.payment.stripe_api_key.clone())
            .with_success_url(config.payment.success_url.clone())
            .with_currency(config.payment.currency.clone()),
    );

    let sms_sender: Arc<dyn SmsSender> = match config.sms.provider {
        SmsProvider::Console => {
            info!("SMS delivery: console (codes are logged, not sent)");
            Arc::new(ConsoleSmsSender::new())
        }
        SmsProvider::Twilio => {
            info!("SMS delivery: twilio");
            Arc::new(TwilioSmsSender::new(TwilioConfig::new(
                config.sms.twilio_account_sid.clone(),
                config.sms.twilio_auth_token.clone(),
                config.sms.twilio_from_number.clone(),
            )))
        }
    };

    let state = AppState {
        user_repository: Arc::new(PostgresUserRepository::new(pool.clone())),
        post_repository: Arc::new(PostgresPostRepository::new(pool.clone())),
        subscription_repository: Arc::new(PostgresSubscriptionRepository::new(pool)),
        payment_provider: Arc::new(payment_provider),
        sms_sender,
    };

    let app = app_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C signal"),
        _ = terminate => info!("Received SIGTERM signal"),
    }
}
