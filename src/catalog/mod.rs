//! Meal catalog operations

mod types;

use reqwest::Client;
use std::collections::HashMap;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;

pub use types::*;

/// Client for the meal catalog service
pub struct CatalogClient {
    /// The base URL for the Cantina backend
    url: String,

    /// The API key used to authenticate requests
    key: String,

    /// HTTP client used for requests
    client: Client,

    /// Client options
    options: ClientOptions,
}

impl CatalogClient {
    /// Create a new CatalogClient
    pub(crate) fn new(url: &str, key: &str, client: Client, options: ClientOptions) -> Self {
        Self {
            url: url.to_string(),
            key: key.to_string(),
            client,
            options,
        }
    }

    /// Get the base URL for catalog operations
    fn get_url(&self, path: &str) -> String {
        format!("{}/catalog/v1{}", self.url, path)
    }

    /// Fetch catalog meals, optionally filtered by school and category
    ///
    /// Both filters are conjunctive: passing a school restricts the list to
    /// meals offered to that school, passing a category restricts it to
    /// that category.
    pub async fn get_meals(
        &self,
        school_id: Option<SchoolId>,
        category: Option<MealCategory>,
    ) -> Result<Vec<Meal>, Error> {
        let url = self.get_url("/meals");

        let mut params = HashMap::new();
        if let Some(school_id) = school_id {
            params.insert("school_id".to_string(), school_id.to_string());
        }
        if let Some(category) = category {
            params.insert("category".to_string(), category.as_str().to_string());
        }

        let meals = Fetch::get(&self.client, &url)
            .bearer_auth(&self.key)
            .header("X-Client-Info", &self.options.client_info)
            .timeout(self.options.request_timeout)
            .query(params)
            .execute::<Vec<Meal>>()
            .await?;

        Ok(meals)
    }
}
