pub mod models;

use super::{ApiError, BaseApiClient};
use models::launch::Launch;
use models::launch_query::LaunchQuery;
use models::launch_query_response::LaunchQueryResponse;

pub struct SpacexApi {
    pub client: BaseApiClient,
    api_prefix: String,
}

impl SpacexApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_api_client = BaseApiClient::new(base_url)?;
        Ok(Self { client: base_api_client, api_prefix: "/v5".to_string() })
    }

    #[cfg(test)]
    pub fn mock(base_url: &str) -> Self {
        Self::new(base_url).unwrap()
    }

    /// One page of the latest launches, in the order the service returned them.
    pub async fn get_latest_launches(&self) -> Result<Vec<Launch>, ApiError> {
        let response: LaunchQueryResponse = self
            .client
            .post_json(&format!("{}/launches/query", self.api_prefix), &LaunchQuery::latest())
            .await?;
        Ok(response.docs)
    }

    /// Fetch a single launch record; the id goes into the path as-is.
    pub async fn get_launch_by_id(&self, launch_id: &str) -> Result<Launch, ApiError> {
        let launch: Launch = self
            .client
            .get(&format!("{}/launches/{}", self.api_prefix, launch_id))
            .await?;
        tracing::debug!(launch_id = %launch.id, name = %launch.name, "fetched launch");
        Ok(launch)
    }
}
