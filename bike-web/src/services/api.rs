//! # API Client
//!
//! Every backend call goes through [`send`], which applies the interception
//! rules from [`shared::http`]:
//!
//! - the stored session token is attached as `Authorization: Bearer ...`
//! - JSON bodies declare `application/json`; multipart bodies let the browser
//!   set the boundary
//! - an authentication failure clears the session (see
//!   [`shared::session::apply_failure`]) and sends the window to `/login`
//!
//! Calls are one-shot: no retries, no caching.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::error::{ApiError, Result};
use shared::http::{join_url, request_headers, BodyKind};
use shared::routes::LOGIN_PATH;
use shared::session::{apply_failure, load_token};
use web_sys::FormData;

use crate::utils::constants::API_BASE;
use crate::utils::dom::hard_redirect;
use crate::utils::storage::BrowserStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Request body variants.
pub enum Body<'a, B: Serialize> {
    Empty,
    Json(&'a B),
    Multipart(FormData),
}

impl<B: Serialize> Body<'_, B> {
    fn kind(&self) -> BodyKind {
        match self {
            Body::Empty => BodyKind::None,
            Body::Json(_) => BodyKind::Json,
            Body::Multipart(_) => BodyKind::Multipart,
        }
    }
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

/// Send one request and decode the JSON response.
pub async fn send<B, T>(
    method: Method,
    path: &str,
    params: &[(&'static str, String)],
    body: Body<'_, B>,
) -> Result<T>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = join_url(API_BASE, path);
    let token = load_token(&BrowserStore::new());

    let mut request = builder(method, &url);
    for (name, value) in request_headers(token.as_deref(), body.kind()) {
        request = request.header(name, &value);
    }
    if !params.is_empty() {
        request = request.query(params.iter().map(|(k, v)| (*k, v.as_str())));
    }

    let request = match body {
        Body::Empty => request.build(),
        Body::Json(payload) => request.json(payload),
        Body::Multipart(form) => request.body(form),
    }
    .map_err(|e| ApiError::Encode(e.to_string()))?;

    log::debug!("[API] {:?} {}", method, url);
    let response = request.send().await.map_err(|e| {
        log::error!("[API] {:?} {} network error: {}", method, url, e);
        ApiError::Network(e.to_string())
    })?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if !response.ok() {
        let error = apply_failure(&BrowserStore::new(), status, &text);
        log::warn!("[API] {:?} {} failed with {}: {}", method, url, status, error);
        if matches!(error, ApiError::Unauthorized) {
            hard_redirect(LOGIN_PATH);
        }
        return Err(error);
    }

    // Empty bodies (204, bare DELETE) decode as JSON null.
    let text = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(text).map_err(|e| {
        log::error!("[API] {:?} {} decode error: {}", method, url, e);
        ApiError::Decode(e.to_string())
    })
}

pub async fn get<T: DeserializeOwned>(path: &str, params: &[(&'static str, String)]) -> Result<T> {
    send::<(), T>(Method::Get, path, params, Body::Empty).await
}

pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, payload: &B) -> Result<T> {
    send(Method::Post, path, &[], Body::Json(payload)).await
}

pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, payload: &B) -> Result<T> {
    send(Method::Put, path, &[], Body::Json(payload)).await
}

pub async fn delete<T: DeserializeOwned>(path: &str) -> Result<T> {
    send::<(), T>(Method::Delete, path, &[], Body::Empty).await
}

pub async fn post_multipart<T: DeserializeOwned>(path: &str, form: FormData) -> Result<T> {
    send::<(), T>(Method::Post, path, &[], Body::Multipart(form)).await
}
