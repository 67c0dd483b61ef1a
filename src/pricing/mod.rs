//! School pricing operations
//!
//! Price resolution and bulk reconciliation are pure and synchronous; only
//! the reads and writes against the pricing service are async.

mod reconcile;
mod resolve;
mod types;

use reqwest::Client;

use crate::catalog::SchoolId;
use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;

pub use reconcile::reconcile;
pub use resolve::{resolve_price, school_price};
pub use types::*;

/// Client for the school pricing service
pub struct PricingClient {
    /// The base URL for the Cantina backend
    url: String,

    /// The API key used to authenticate requests
    key: String,

    /// HTTP client used for requests
    client: Client,

    /// Client options
    options: ClientOptions,
}

impl PricingClient {
    /// Create a new PricingClient
    pub(crate) fn new(url: &str, key: &str, client: Client, options: ClientOptions) -> Self {
        Self {
            url: url.to_string(),
            key: key.to_string(),
            client,
            options,
        }
    }

    /// Get the base URL for pricing operations
    fn get_url(&self, path: &str) -> String {
        format!("{}/pricing/v1{}", self.url, path)
    }

    /// Fetch a school's price overrides together with the table's version
    ///
    /// The version is the response `ETag`; hand it back to
    /// [`bulk_upsert_overrides`](Self::bulk_upsert_overrides) so a save
    /// against a stale table fails with [`Error::Conflict`] instead of
    /// silently overwriting another admin's edits.
    pub async fn get_school_overrides(
        &self,
        school_id: SchoolId,
    ) -> Result<SchoolPriceTable, Error> {
        let url = self.get_url(&format!("/schools/{}/meal-prices", school_id));

        let (overrides, version) = Fetch::get(&self.client, &url)
            .bearer_auth(&self.key)
            .header("X-Client-Info", &self.options.client_info)
            .timeout(self.options.request_timeout)
            .execute_with_etag::<Vec<SchoolMealOverride>>()
            .await?;

        Ok(SchoolPriceTable { version, overrides })
    }

    /// Persist a school's full price table in one atomic request
    ///
    /// The batch rewrites the whole table, one row per catalog meal (see
    /// [`reconcile`]). When `version` is present it is sent as `If-Match`;
    /// a 409/412 response surfaces as [`Error::Conflict`] and nothing is
    /// persisted.
    pub async fn bulk_upsert_overrides(
        &self,
        school_id: SchoolId,
        prices: &[PriceUpsert],
        version: Option<&str>,
    ) -> Result<(), Error> {
        let url = self.get_url(&format!("/schools/{}/meal-prices", school_id));

        let mut request = Fetch::put(&self.client, &url)
            .bearer_auth(&self.key)
            .header("X-Client-Info", &self.options.client_info)
            .timeout(self.options.request_timeout);

        if let Some(version) = version {
            request = request.if_match(version);
        }

        request.json(&prices)?.execute_unit().await
    }
}
