//! Request handlers: call `PublicationApi` and shape JSON replies

use super::ErrorBody;
use crate::api::PublicationApi;
use crate::catalog::CatalogError;
use crate::query::{FilterParams, PublicationQuery};
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reply::{self, Reply, Response};
use warp::Rejection;

const PUBLICATION_NOT_FOUND: &str = "Publication not found";

fn error_reply(message: &str, status: StatusCode) -> Response {
    reply::with_status(reply::json(&ErrorBody::new(message)), status).into_response()
}

/// Reply for a failed lookup.
///
/// The catalog is loaded before the server binds, so lookups can only fail
/// with `CatalogError::NotFound`.
fn not_found_reply(error: &CatalogError) -> Response {
    tracing::debug!(%error, "publication lookup failed");
    error_reply(PUBLICATION_NOT_FOUND, StatusCode::NOT_FOUND)
}

pub fn list_publications(params: FilterParams, api: PublicationApi) -> Response {
    let query = PublicationQuery::from_params(&params);
    let publications = api.publications(&query);
    tracing::debug!(?query, matched = publications.len(), "listed publications");
    reply::json(&publications).into_response()
}

pub fn get_publication(raw_id: String, api: PublicationApi) -> Response {
    match api.resolve_id(&raw_id).and_then(|id| api.publication(id)) {
        Ok(publication) => reply::json(publication).into_response(),
        Err(e) => not_found_reply(&e),
    }
}

pub fn get_related(raw_id: String, api: PublicationApi) -> Response {
    match api.resolve_id(&raw_id).and_then(|id| api.related(id)) {
        Ok(related) => reply::json(&related).into_response(),
        Err(e) => not_found_reply(&e),
    }
}

pub fn get_insights(raw_id: String, api: PublicationApi) -> Response {
    match api.resolve_id(&raw_id).and_then(|id| api.insights(id)) {
        Ok(insights) => reply::json(&insights).into_response(),
        Err(e) => not_found_reply(&e),
    }
}

pub fn get_summary(api: PublicationApi) -> Response {
    reply::json(&api.summary()).into_response()
}

pub fn get_knowledge_graph(api: PublicationApi) -> Response {
    reply::json(api.knowledge_graph()).into_response()
}

/// Ranked retrieval has no server-side implementation; answer 501 so
/// clients get a well-formed error instead of a bare 404.
pub fn ranked_search_unavailable(endpoint: &'static str) -> Response {
    tracing::warn!(endpoint, "ranked search requested but not implemented");
    error_reply(
        "Ranked search is not implemented by this server",
        StatusCode::NOT_IMPLEMENTED,
    )
}

/// Turn unmatched routes and wrong methods into JSON errors
pub async fn handle_rejection(rejection: Rejection) -> Result<Response, Infallible> {
    let reply = if rejection.is_not_found() {
        error_reply("Not found", StatusCode::NOT_FOUND)
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        error_reply("Method not allowed", StatusCode::METHOD_NOT_ALLOWED)
    } else {
        tracing::warn!(?rejection, "unhandled rejection");
        error_reply("Bad request", StatusCode::BAD_REQUEST)
    };
    Ok(reply)
}
