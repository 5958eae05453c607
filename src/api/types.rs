use serde::Deserialize;

pub type StoryId = u64;

/// A story record as returned by `/item/{id}.json`.
///
/// Fields the API omits (deleted items, self posts without a url) fall back
/// to their defaults instead of failing the whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Story {
    pub by: String,
    pub descendants: u32,
    pub id: StoryId,
    pub score: u32,
    pub time: u64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl Story {
    /// Host part of the url without a leading `www.`, if the story has one.
    pub fn domain(&self) -> Option<&str> {
        self.url
            .split("://")
            .nth(1)
            .and_then(|s| s.split('/').next())
            .map(|s| s.strip_prefix("www.").unwrap_or(s))
            .filter(|s| !s.is_empty())
    }

    pub fn summary(&self, ago: &str) -> String {
        format!("{} points by {} - {}", self.score, self.by, ago)
    }
}
