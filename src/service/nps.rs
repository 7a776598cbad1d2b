//! Client for the National Park Service data API.

use crate::config::NpsSettings;
use crate::error::AppError;
use reqwest::Client;
use serde_json::Value;

#[derive(Clone)]
pub struct NpsClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl NpsClient {
    pub fn new(settings: &NpsSettings) -> Self {
        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            client: Client::new(),
        }
    }

    /// GET {base}/parks?parkCode=..&api_key=.. and return the parsed body as-is.
    pub async fn park_details(&self, park_code: &str) -> Result<Value, AppError> {
        let url = format!("{}/parks", self.base_url);
        tracing::debug!(url = %url, park_code, "nps request");

        let response = self
            .client
            .get(&url)
            .query(&[("parkCode", park_code), ("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("NPS API request failed: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!("NPS API returned {}", status)));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::Upstream(format!("NPS API sent an unreadable body: {}", e.without_url())))
    }
}
