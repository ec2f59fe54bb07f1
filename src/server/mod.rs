//! HTTP server exposing `PublicationApi` as a JSON REST interface
//!
//! Routes (all under `/api`):
//! - `GET  /publications?search=&year=&mission=&risk=`
//! - `GET  /publications/:id`
//! - `GET  /summary`
//! - `GET  /knowledge-graph`
//! - `GET  /ai-insights/:id`
//! - `GET  /related/:id`
//! - `POST /search`, `POST /methods` (501)

mod config;
mod handlers;

pub use config::{ServerConfig, DEFAULT_PORT};

use crate::api::PublicationApi;
use crate::query::FilterParams;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use thiserror::Error;
use warp::{Filter, Rejection, Reply};

/// Errors that can occur while running the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: warp::Error,
    },
}

/// JSON body of every error reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

fn with_api(api: PublicationApi) -> impl Filter<Extract = (PublicationApi,), Error = Infallible> + Clone {
    warp::any().map(move || api.clone())
}

/// All routes, with JSON error recovery, CORS and request tracing applied
pub fn routes(api: PublicationApi) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let list = warp::path!("api" / "publications")
        .and(warp::get())
        .and(warp::query::<Vec<(String, String)>>())
        .map(|pairs: Vec<(String, String)>| FilterParams::from_pairs(pairs))
        .and(with_api(api.clone()))
        .map(handlers::list_publications);

    let publication = warp::path!("api" / "publications" / String)
        .and(warp::get())
        .and(with_api(api.clone()))
        .map(handlers::get_publication);

    let summary = warp::path!("api" / "summary")
        .and(warp::get())
        .and(with_api(api.clone()))
        .map(handlers::get_summary);

    let graph = warp::path!("api" / "knowledge-graph")
        .and(warp::get())
        .and(with_api(api.clone()))
        .map(handlers::get_knowledge_graph);

    let insights = warp::path!("api" / "ai-insights" / String)
        .and(warp::get())
        .and(with_api(api.clone()))
        .map(handlers::get_insights);

    let related = warp::path!("api" / "related" / String)
        .and(warp::get())
        .and(with_api(api))
        .map(handlers::get_related);

    let search = warp::path!("api" / "search")
        .and(warp::post())
        .map(|| handlers::ranked_search_unavailable("search"));

    let methods = warp::path!("api" / "methods")
        .and(warp::post())
        .map(|| handlers::ranked_search_unavailable("methods"));

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"]);

    list.or(publication)
        .or(summary)
        .or(graph)
        .or(insights)
        .or(related)
        .or(search)
        .or(methods)
        .recover(handlers::handle_rejection)
        .with(cors)
        .with(warp::trace::request())
}

/// Bind the server and return the bound address with a future that serves
/// until `shutdown` resolves.
pub fn bind(
    config: ServerConfig,
    api: PublicationApi,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(SocketAddr, impl Future<Output = ()>), ServerError> {
    let addr = config.socket_addr();
    warp::serve(routes(api))
        .try_bind_with_graceful_shutdown(addr, shutdown)
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve until Ctrl-C
pub async fn serve(config: ServerConfig, api: PublicationApi) -> Result<(), ServerError> {
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for shutdown signal");
        }
    };
    let (addr, server) = bind(config, api, shutdown)?;
    tracing::info!(%addr, "server listening");
    server.await;
    tracing::info!("server stopped");
    Ok(())
}
