//! HTTP helpers for the prediction service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against same-origin
//! paths, which the host forwards to the service.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! page only talks to the service from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and bodies that do not match the
//! expected shape all come back as `Err`. Callers log and stop; nothing is
//! retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{FormPayload, InsightRecord, PredictResponse, Prediction};
use crate::state::insights::InsightCase;

pub const PREDICT_PATH: &str = "/predict";
pub const PREDICTIONS_PATH: &str = "/predictions";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// The two calls the page controller makes.
///
/// Futures are driven on the browser's single thread, so no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait PredictionApi {
    /// `POST /predict` with the form payload as the JSON body.
    async fn predict(&self, payload: &FormPayload) -> Result<PredictResponse, ApiError>;

    /// `GET /predictions`.
    async fn predictions(&self) -> Result<Vec<Prediction>, ApiError>;
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn insight_endpoint(case: InsightCase) -> String {
    format!("/visualizations/{}", case.slug())
}

/// Accept only 2xx statuses.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn ensure_success(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

/// Browser implementation backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

impl PredictionApi for HttpApi {
    async fn predict(&self, payload: &FormPayload) -> Result<PredictResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(PREDICT_PATH)
                .json(payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            ensure_success(resp.status())?;
            resp.json::<PredictResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(ApiError::Unavailable)
        }
    }

    async fn predictions(&self) -> Result<Vec<Prediction>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            get_json(PREDICTIONS_PATH).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

impl HttpApi {
    /// `GET /visualizations/{case}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or a
    /// body that is not a list of objects.
    pub async fn insight(&self, case: InsightCase) -> Result<Vec<InsightRecord>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            get_json(&insight_endpoint(case)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = case;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_success(resp.status())?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
