use async_trait::async_trait;
use gloo_net::http::Request;
use thiserror::Error;

use super::models::{ErrorDetail, FeedbackSubmission, Testimonial};
use crate::config::SiteConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("could not build request: {0}")]
    Encode(String),
    #[error("server responded with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// The two calls the page makes against the studio backend.
#[async_trait(?Send)]
pub trait StudioApi {
    async fn fetch_testimonials(&self, limit: usize) -> Result<Vec<Testimonial>, ApiError>;

    async fn submit_feedback(&self, submission: &FeedbackSubmission) -> Result<(), ApiError>;
}

/// Browser implementation backed by `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpApi {
    config: SiteConfig,
}

impl HttpApi {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Builds the error for a non-2xx answer. A body that is not JSON, or whose
/// `detail` is not a string, carries no detail.
pub fn rejection(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorDetail>(body)
        .ok()
        .and_then(|parsed| parsed.detail);
    ApiError::Rejected { status, detail }
}

/// Interprets the answer to `GET /testimonials`.
pub fn read_testimonials(status: u16, body: &str) -> Result<Vec<Testimonial>, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Rejected { status, detail: None });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Interprets the answer to `POST /feedback`. Only the status matters on success.
pub fn read_feedback_reply(status: u16, body: &str) -> Result<(), ApiError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(rejection(status, body))
    }
}

#[async_trait(?Send)]
impl StudioApi for HttpApi {
    async fn fetch_testimonials(&self, limit: usize) -> Result<Vec<Testimonial>, ApiError> {
        let url = self.config.endpoint(&format!("/testimonials?limit={}", limit));
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_testimonials(status, &body)
    }

    async fn submit_feedback(&self, submission: &FeedbackSubmission) -> Result<(), ApiError> {
        let response = Request::post(&self.config.endpoint("/feedback"))
            .json(submission)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        // An unreadable error body is treated like one without a detail.
        let body = response.text().await.unwrap_or_default();
        read_feedback_reply(status, &body)
    }
}
