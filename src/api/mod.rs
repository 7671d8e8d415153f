//! Shop API Bindings
//!
//! HTTP bindings to the remote cart and catalog endpoints, organized by resource.

mod cart;
mod catalog;

use serde::de::DeserializeOwned;

// Re-export all public items
pub use cart::*;
pub use catalog::*;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// GET `url` and decode a JSON body. Any non-2xx status is an error.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, ApiError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ApiError::Request { url: url.to_string(), source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status { url: url.to_string(), status: status.as_u16() });
    }

    response
        .json::<T>()
        .await
        .map_err(|source| ApiError::Decode { url: url.to_string(), source })
}
