//! Meal-plan scheduling and persistence
//!
//! The editing state machines ([`weekly`], [`monthly`]) and the payload
//! builder ([`builder`]) are pure and synchronous; [`PlanClient`] is the
//! async boundary that persists what they produce.

pub mod builder;
pub mod monthly;
pub mod weekly;

mod types;

use reqwest::Client;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;

pub use types::*;

/// Client for the meal-plan persistence service
pub struct PlanClient {
    /// The base URL for the Cantina backend
    url: String,

    /// The API key used to authenticate requests
    key: String,

    /// HTTP client used for requests
    client: Client,

    /// Client options
    options: ClientOptions,
}

impl PlanClient {
    /// Create a new PlanClient
    pub(crate) fn new(url: &str, key: &str, client: Client, options: ClientOptions) -> Self {
        Self {
            url: url.to_string(),
            key: key.to_string(),
            client,
            options,
        }
    }

    /// Get the base URL for plan operations
    fn get_url(&self, path: &str) -> String {
        format!("{}/plans/v1{}", self.url, path)
    }

    /// Persist a new meal plan, returning its identity
    ///
    /// For a monthly plan, follow up with
    /// [`assign_meals_to_dates`](Self::assign_meals_to_dates) using the
    /// returned id and the submission's `date_assignments`.
    pub async fn create_meal_plan(&self, submission: &PlanSubmission) -> Result<CreatedPlan, Error> {
        let url = self.get_url("/meal-plans");

        let created = Fetch::post(&self.client, &url)
            .bearer_auth(&self.key)
            .header("X-Client-Info", &self.options.client_info)
            .timeout(self.options.request_timeout)
            .json(submission)?
            .execute::<CreatedPlan>()
            .await?;

        Ok(created)
    }

    /// Replace an existing meal plan
    pub async fn update_meal_plan(
        &self,
        plan_id: PlanId,
        submission: &PlanSubmission,
    ) -> Result<(), Error> {
        let url = self.get_url(&format!("/meal-plans/{}", plan_id));

        Fetch::put(&self.client, &url)
            .bearer_auth(&self.key)
            .header("X-Client-Info", &self.options.client_info)
            .timeout(self.options.request_timeout)
            .json(submission)?
            .execute_unit()
            .await
    }

    /// Persist a monthly plan's date assignments
    pub async fn assign_meals_to_dates(
        &self,
        plan_id: PlanId,
        assignments: &[DateAssignment],
    ) -> Result<(), Error> {
        let url = self.get_url(&format!("/meal-plans/{}/dates", plan_id));

        Fetch::post(&self.client, &url)
            .bearer_auth(&self.key)
            .header("X-Client-Info", &self.options.client_info)
            .timeout(self.options.request_timeout)
            .json(&assignments)?
            .execute_unit()
            .await
    }
}
