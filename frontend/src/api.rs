use gloo_net::http::Request;
use log::error;
use serde::Serialize;

use crate::config;
use crate::error::SubmitError;
use crate::forms::beta::BetaApplication;
use crate::forms::newsletter::NewsletterRequest;

/// POSTs `body` as JSON. Any 2xx counts as success; the response body is not read.
async fn post_json<T: Serialize>(endpoint: &str, body: &T) -> Result<(), SubmitError> {
    let url = format!("{}{}", config::get_backend_url(), endpoint);
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| SubmitError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Status(response.status()))
    }
}

pub async fn submit_beta(application: BetaApplication) -> Result<(), SubmitError> {
    post_json(config::BETA_ENDPOINT, &application)
        .await
        .map_err(|e| {
            error!("Beta signup failed: {}", e);
            e
        })
}

pub async fn subscribe_newsletter(request: NewsletterRequest) -> Result<(), SubmitError> {
    post_json(config::NEWSLETTER_ENDPOINT, &request)
        .await
        .map_err(|e| {
            error!("Newsletter signup failed: {}", e);
            e
        })
}
