//! Helpers for driving the warp routes in-process

use serde_json::Value;
use spacebio::server::routes;
use spacebio::PublicationApi;
use warp::http::{Response, StatusCode};
use warp::hyper::body::Bytes;

/// Issue a GET and return the raw response
pub async fn get(api: &PublicationApi, path: &str) -> Response<Bytes> {
    warp::test::request()
        .method("GET")
        .path(path)
        .reply(&routes(api.clone()))
        .await
}

/// Issue a GET and decode the JSON body
pub async fn get_json(api: &PublicationApi, path: &str) -> (StatusCode, Value) {
    let response = get(api, path).await;
    let body = serde_json::from_slice(response.body()).expect("response body is JSON");
    (response.status(), body)
}

/// Issue a POST with a JSON body and decode the JSON reply
pub async fn post_json(api: &PublicationApi, path: &str, body: &Value) -> (StatusCode, Value) {
    let response = warp::test::request()
        .method("POST")
        .path(path)
        .json(body)
        .reply(&routes(api.clone()))
        .await;
    let body = serde_json::from_slice(response.body()).expect("response body is JSON");
    (response.status(), body)
}
