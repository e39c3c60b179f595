pub use crate::common::RouteResult;

use axum::Router;
use schools::{client::Client, database::Database};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::{
    config::{CorsConfig, WebConfig},
    middleware::cors::{cors_layer, preflight_no_content},
};

pub mod api;
pub mod common;
pub mod config;
pub mod middleware;

#[derive(Clone)]
pub struct WebState<D: Database> {
    pub school_client: Client<D>,
}

impl<D: Database> WebState<D> {
    pub fn new(database: D) -> Self {
        Self {
            school_client: Client::new(database),
        }
    }
}

/// Builds the complete application router, including CORS handling and
/// request tracing.
pub fn app<D: Database>(cors: &CorsConfig, state: WebState<D>) -> Router {
    api::routes(state)
        .layer(cors_layer(cors))
        .layer(axum::middleware::map_response(preflight_no_content))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

pub async fn start_web_server<D: Database>(
    config: WebConfig,
    state: WebState<D>,
) -> std::io::Result<()> {
    let routes = app(&config.cors, state);

    let listener = TcpListener::bind(config.bind_address).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, routes.into_make_service()).await?;

    Ok(())
}
