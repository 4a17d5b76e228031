//! HTTP client for the Steam storefront API.
//!
//! Wraps the undocumented `appdetails` endpoint used by the Steam store
//! front-end. Responses arrive as a JSON object keyed by app id string, each
//! value carrying a `success` flag and an optional `data` payload; a missing
//! key or `success: false` are both treated as the app being unknown.

pub mod error;
pub mod model;

pub use error::Error;

use std::collections::HashMap;

use crate::model::{AppDetails, AppDetailsEnvelope};

/// Default base URL of the Steam storefront API.
pub const DEFAULT_STORE_API_URL: &str = "https://store.steampowered.com/api";

/// Client for the Steam storefront API.
///
/// Cheap to clone; the underlying `reqwest::Client` is reference-counted.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

/// Builder for [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Override the storefront base URL. Used by tests to point the client
    /// at a mock server.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.trim_end_matches('/').to_string());
        self
    }

    /// Set the User-Agent header sent with every request.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let mut builder = reqwest::Client::builder();

        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(Client {
            http: builder.build()?,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_STORE_API_URL.to_string()),
        })
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Fetch the store page details for a single app.
    ///
    /// # Errors
    /// - [`Error::NotFound`] - the store reported the id unknown or
    ///   unsuccessful, or omitted it from the response envelope
    /// - [`Error::Http`] - the request failed or the body was not the
    ///   expected JSON shape
    pub async fn app_details(&self, app_id: i64) -> Result<AppDetails, Error> {
        let url = format!(
            "{}/appdetails?appids={}&cc=us&l=english",
            self.base_url, app_id
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<HashMap<String, AppDetailsEnvelope>>()
            .await?;

        let envelope = response
            .get(&app_id.to_string())
            .ok_or(Error::NotFound(app_id))?;

        if !envelope.success {
            return Err(Error::NotFound(app_id));
        }

        envelope
            .data
            .clone()
            .ok_or(Error::UnexpectedResponse(app_id))
    }
}
