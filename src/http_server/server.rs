//! # HTTP Server
//!
//! Combines the entry and observability routers behind a CORS layer and
//! serves them until Ctrl-C.

use std::io;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::entry_routes::entry_routes;
use super::observability_routes::observability_routes;
use crate::observability::Logger;
use crate::store::TodoStore;

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::DELETE,
    Method::PUT,
    Method::OPTIONS,
];

/// HTTP server for the todo store
pub struct HttpServer {
    config: HttpServerConfig,
    store: Arc<TodoStore>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with an empty store
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_store(config, Arc::new(TodoStore::new()))
    }

    /// Create a new HTTP server around an existing store
    pub fn with_store(config: HttpServerConfig, store: Arc<TodoStore>) -> Self {
        let router = Self::build_router(&config, store.clone());
        Self {
            config,
            store,
            router,
        }
    }

    fn build_router(config: &HttpServerConfig, store: Arc<TodoStore>) -> Router {
        Router::new()
            .merge(entry_routes(store.clone()))
            .merge(observability_routes(store))
            .layer(Self::cors_layer(config))
    }

    /// Without configured origins any origin is allowed, but credentials are
    /// not. With a list, only those origins are allowed and credentials are.
    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.cors_origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(ALLOWED_METHODS)
                .allow_headers(Any);
        }

        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        if origins.len() != config.cors_origins.len() {
            Logger::warn(
                "CORS_ORIGIN_IGNORED",
                &[("configured", config.cors_origins.join(",").as_str())],
            );
        }

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(ALLOWED_METHODS)
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .allow_credentials(true)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Shared handle to the store
    pub fn store(&self) -> Arc<TodoStore> {
        self.store.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address. Host names are resolved.
    pub async fn bind(&self) -> Result<TcpListener, io::Error> {
        TcpListener::bind(self.config.socket_addr()).await
    }

    /// Bind and serve until Ctrl-C.
    ///
    /// Failing to bind is returned to the caller.
    pub async fn start(self) -> Result<(), io::Error> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until Ctrl-C
    pub async fn serve(self, listener: TcpListener) -> Result<(), io::Error> {
        let local = listener.local_addr()?.to_string();
        Logger::info("SERVER_STARTED", &[("addr", local.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Logger::info(
            "SERVER_STOPPED",
            &[
                ("addr", local.as_str()),
                ("records", self.store.len().to_string().as_str()),
            ],
        );
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        Logger::warn("SHUTDOWN_SIGNAL_UNAVAILABLE", &[]);
        std::future::pending::<()>().await;
    }
}
