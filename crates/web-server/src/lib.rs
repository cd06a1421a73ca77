use analytics::MetricsEngine;
use axum::{
    Router,
    routing::{get, post},
};
use events::Notification;
use exporter::Exporter;
use notifier::{StubMailer, WebhookNotifier};
use std::sync::Arc;
use tokio::sync::broadcast;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub engine: MetricsEngine,
    pub exporter: Exporter,
    pub mailer: StubMailer,
    notify_tx: broadcast::Sender<Notification>,
}

impl AppState {
    pub fn new(config: configuration::Config, notify_tx: broadcast::Sender<Notification>) -> Self {
        Self {
            engine: MetricsEngine::new(),
            exporter: Exporter::new(config.report.clone()),
            mailer: StubMailer::new(&config.notifier),
            notify_tx,
        }
    }

    /// Broadcasts a notification to whoever is listening. A send error only
    /// means there are no subscribers right now, which is fine: the caller
    /// still carries the notice in its own response.
    pub fn notify(&self, notification: &Notification) {
        let _ = self.notify_tx.send(notification.clone());
    }
}

/// The main function to configure and run the web server.
pub async fn run_server(config: configuration::Config) -> anyhow::Result<()> {
    // Note: Tracing is already initialized in main.rs, so we don't need to
    // initialize it again here.

    let (notify_tx, notify_rx) = broadcast::channel(64);

    // Forwarding is optional; without a webhook URL the receiver is dropped
    // and broadcasts simply go unobserved.
    if let Some(webhook) = WebhookNotifier::new(&config.notifier) {
        tokio::spawn(notifier::run_notifier_service(webhook, notify_rx));
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app_state = Arc::new(AppState::new(config, notify_tx));

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    // --- DEFINE THE APPLICATION ROUTES ---
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/validate", post(handlers::validate))
        .route("/api/calculate", post(handlers::calculate))
        .route("/api/export", post(handlers::export))
        .route("/api/send", post(handlers::send))
        .with_state(app_state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http());

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
