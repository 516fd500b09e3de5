//! TheMealDB API client.
//!
//! Two read-only endpoints: search by name and fetch a random meal. The API
//! wraps every response in a `meals` array and sends `{"meals": null}` when a
//! search matches nothing, which maps to an empty result here.

use larder_core::models::MealRecord;
use serde::Deserialize;
use thiserror::Error;

const API_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Remote recipe lookup errors
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: status {status}")]
    Api { status: u16 },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Response envelope used by every TheMealDB endpoint.
#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    meals: Option<Vec<MealRecord>>,
}

/// Client for TheMealDB's public recipe endpoints.
pub struct MealDbClient {
    http: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    /// Creates a client against the public API.
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Creates a client against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Searches meals by name, returning zero or more records.
    ///
    /// A blank term returns an empty list without issuing a request.
    pub async fn search(&self, term: &str) -> Result<Vec<MealRecord>, RemoteError> {
        if term.trim().is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/search.php", self.base_url);
        let envelope = self.fetch(self.http.get(&url).query(&[("s", term)])).await?;
        Ok(envelope.meals.unwrap_or_default())
    }

    /// Fetches a single random meal, or `None` if the API returns nothing.
    pub async fn random(&self) -> Result<Option<MealRecord>, RemoteError> {
        let url = format!("{}/random.php", self.base_url);
        let envelope = self.fetch(self.http.get(&url)).await?;
        Ok(envelope.meals.unwrap_or_default().into_iter().next())
    }

    async fn fetch(&self, request: reqwest::RequestBuilder) -> Result<MealsEnvelope, RemoteError> {
        let response = request
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Api {
                status: status.as_u16(),
            });
        }

        response
            .json::<MealsEnvelope>()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))
    }
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new()
    }
}
