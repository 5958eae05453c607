use std::time::Duration;

use futures::TryStreamExt;
use futures::stream::FuturesUnordered;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::{ApiError, Resource};
use super::types::{Story, StoryId};

pub const DEFAULT_API_BASE: &str = "https://hacker-news.firebaseio.com/v0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct HnClient {
    http: reqwest::Client,
    base_url: String,
}

impl HnClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        resource: Resource,
    ) -> Result<T, ApiError> {
        let fail = move |e| ApiError::from_reqwest(resource, e);
        self.http
            .get(url)
            .send()
            .await
            .map_err(fail)?
            .error_for_status()
            .map_err(fail)?
            .json()
            .await
            .map_err(fail)
    }

    /// Ranked ids of the current top stories.
    pub async fn fetch_story_ids(&self) -> Result<Vec<StoryId>, ApiError> {
        let url = format!("{}/topstories.json", self.base_url);
        debug!(%url, "fetching story ids");
        self.get_json(&url, Resource::TopStories).await
    }

    /// A single story. Ids the server does not know come back as `null`,
    /// which is reported as [`ApiError::Missing`].
    pub async fn fetch_story(&self, id: StoryId) -> Result<Story, ApiError> {
        let url = format!("{}/item/{}.json", self.base_url, id);
        let story: Option<Story> = self.get_json(&url, Resource::Item(id)).await?;
        story.ok_or(ApiError::Missing(id))
    }

    /// Fetches every story of a batch concurrently.
    ///
    /// Stories come back in completion order, not in the order of `ids`.
    /// The first failing fetch fails the whole batch and the rest of the
    /// in-flight requests are dropped, so callers never see a partial batch.
    pub async fn fetch_batch(&self, ids: &[StoryId]) -> Result<Vec<Story>, ApiError> {
        debug!(count = ids.len(), "fetching batch");
        ids.iter()
            .map(|&id| self.fetch_story(id))
            .collect::<FuturesUnordered<_>>()
            .try_collect()
            .await
    }
}
