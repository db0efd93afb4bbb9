use crate::config::CodedocsConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::providers::openai::OpenAiProvider;
use crate::services::providers::CompletionProvider;
use crate::services::DocGenerator;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Headroom on top of the file size limit for multipart framing.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub config: CodedocsConfig,
    pub generator: Arc<DocGenerator>,
    pub provider: Arc<dyn CompletionProvider>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: CodedocsConfig) -> Result<Self, AppError> {
        let provider: Arc<dyn CompletionProvider> =
            Arc::new(OpenAiProvider::new(config.openai.clone()));

        Self::build_with_provider(config, provider).await
    }

    pub async fn build_with_provider(
        config: CodedocsConfig,
        provider: Arc<dyn CompletionProvider>,
    ) -> Result<Self, AppError> {
        let generator = Arc::new(DocGenerator::new(
            provider.clone(),
            config.openai.max_output_tokens,
        ));

        let state = AppState {
            config: config.clone(),
            generator,
            provider,
        };

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let app = Router::new()
            .route("/", get(handlers::index))
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/generate-docs", post(handlers::generate_docs))
            // Unmatched paths fall back to the page embedding the UI
            .fallback(handlers::index)
            .layer(DefaultBodyLimit::max(
                config.upload.max_file_bytes + MULTIPART_OVERHEAD_BYTES,
            ))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
