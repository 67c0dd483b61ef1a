//! Cantina Rust Client Library
//!
//! A Rust client library for the Cantina school meal-program backend,
//! providing the meal-plan scheduling engine, school-aware price
//! resolution, and typed access to the catalog, pricing, and plan
//! persistence services.

pub mod catalog;
pub mod config;
pub mod error;
pub mod fetch;
pub mod plan;
pub mod pricing;

use reqwest::Client;

use crate::catalog::CatalogClient;
use crate::config::ClientOptions;
use crate::plan::PlanClient;
use crate::pricing::PricingClient;

/// The main entry point for the Cantina Rust client
pub struct Cantina {
    /// The base URL for the Cantina backend
    pub url: String,
    /// The API key used to authenticate requests
    pub key: String,
    /// HTTP client used for requests
    pub http_client: Client,
    /// Client options
    pub options: ClientOptions,
}

impl Cantina {
    /// Create a new Cantina client
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the Cantina backend
    /// * `api_key` - The API key for the admin session
    ///
    /// # Example
    ///
    /// ```
    /// use cantina_rust::Cantina;
    ///
    /// let cantina = Cantina::new("https://api.cantina.example", "your-api-key");
    /// ```
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self::new_with_options(base_url, api_key, ClientOptions::default())
    }

    /// Create a new Cantina client with custom options
    ///
    /// # Example
    ///
    /// ```
    /// use cantina_rust::{Cantina, config::ClientOptions};
    ///
    /// let options = ClientOptions::default().with_request_timeout(None);
    /// let cantina = Cantina::new_with_options("https://api.cantina.example", "your-api-key", options);
    /// ```
    pub fn new_with_options(base_url: &str, api_key: &str, options: ClientOptions) -> Self {
        let http_client = Client::new();

        Self {
            url: base_url.trim_end_matches('/').to_string(),
            key: api_key.to_string(),
            http_client,
            options,
        }
    }

    /// Get a client for the meal catalog service
    ///
    /// # Example
    ///
    /// ```
    /// use cantina_rust::Cantina;
    ///
    /// let cantina = Cantina::new("https://api.cantina.example", "your-api-key");
    /// let catalog = cantina.catalog();
    /// ```
    pub fn catalog(&self) -> CatalogClient {
        CatalogClient::new(
            &self.url,
            &self.key,
            self.http_client.clone(),
            self.options.clone(),
        )
    }

    /// Get a client for the school pricing service
    pub fn pricing(&self) -> PricingClient {
        PricingClient::new(
            &self.url,
            &self.key,
            self.http_client.clone(),
            self.options.clone(),
        )
    }

    /// Get a client for the meal-plan persistence service
    pub fn plans(&self) -> PlanClient {
        PlanClient::new(
            &self.url,
            &self.key,
            self.http_client.clone(),
            self.options.clone(),
        )
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::catalog::{Meal, MealCategory, MealId, SchoolId};
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::plan::builder::{build_monthly, build_weekly};
    pub use crate::plan::monthly::{DateOp, MonthlyAssignments};
    pub use crate::plan::weekly::{SlotOp, WeeklySchedule};
    pub use crate::plan::{
        CreatedPlan, DateAssignment, PlanDraft, PlanId, PlanStatus, PlanSubmission, PlanType,
        ResolvedMealPlanEntry, Weekday,
    };
    pub use crate::pricing::{resolve_price, school_price, PriceUpsert, SchoolMealOverride};
    pub use crate::Cantina;
}
