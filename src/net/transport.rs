//! Request/response seam between the API client and the network.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: the browser transport returns [`ApiError::Unavailable`],
//! and tests drive the API client with a recording transport instead.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::types::AvatarFile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

/// Body of an outgoing request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    /// Serialized as JSON with `Content-Type: application/json`.
    Json(serde_json::Value),
    /// Sent as `multipart/form-data` with a single file field. The browser
    /// chooses the boundary, so no content type is set explicitly.
    Multipart { field: String, file: AvatarFile },
}

/// A fully resolved request: absolute URL, optional `Authorization` value, body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub authorization: Option<String>,
    pub body: RequestBody,
}

/// Raw response: status code and undecoded body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single request and returns the raw response.
///
/// Implementations must not retry; each call is exactly one round trip.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request cannot be built or sent, or the
    /// response body cannot be read. Non-success statuses are not errors here.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Transport backed by the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            send_with_fetch(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn send_with_fetch(request: ApiRequest) -> Result<ApiResponse, ApiError> {
    use gloo_net::http::Request;

    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Patch => Request::patch(&request.url),
    };
    if let Some(authorization) = &request.authorization {
        builder = builder.header("Authorization", authorization);
    }

    let prepared = match request.body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(value) => builder.json(&value),
        RequestBody::Multipart { field, file } => builder.body(multipart_form(&field, &file)?),
    }
    .map_err(|e| ApiError::Request(e.to_string()))?;

    let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(ApiResponse { status, body })
}

#[cfg(feature = "csr")]
fn multipart_form(field: &str, file: &AvatarFile) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Request(format!("{e:?}"));

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(file.bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;

    let form = web_sys::FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename(field, &blob, &file.file_name)
        .map_err(js_err)?;
    Ok(form)
}
