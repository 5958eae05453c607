use std::fmt;

use super::types::StoryId;

/// The request an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    TopStories,
    Item(StoryId),
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopStories => write!(f, "top stories"),
            Self::Item(id) => write!(f, "story {id}"),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// The HTTP client could not be built.
    Client(String),
    /// Connection failure or timeout.
    Network { resource: Resource, details: String },
    /// Non-2xx response.
    Status { resource: Resource, code: u16 },
    /// Body was not the expected JSON.
    Parse { resource: Resource, details: String },
    /// The item endpoint answered `null`.
    Missing(StoryId),
}

impl ApiError {
    pub(super) fn from_reqwest(resource: Resource, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Network {
                resource,
                details: "request timed out".into(),
            }
        } else if let Some(status) = err.status() {
            Self::Status {
                resource,
                code: status.as_u16(),
            }
        } else if err.is_decode() {
            Self::Parse {
                resource,
                details: err.to_string(),
            }
        } else {
            Self::Network {
                resource,
                details: err.to_string(),
            }
        }
    }

    pub fn resource(&self) -> Option<Resource> {
        match self {
            Self::Client(_) => None,
            Self::Network { resource, .. }
            | Self::Status { resource, .. }
            | Self::Parse { resource, .. } => Some(*resource),
            Self::Missing(id) => Some(Resource::Item(*id)),
        }
    }

    /// The story whose fetch failed, for item requests.
    pub fn story_id(&self) -> Option<StoryId> {
        match self.resource()? {
            Resource::Item(id) => Some(id),
            Resource::TopStories => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(details) => write!(f, "could not build HTTP client: {details}"),
            Self::Network { resource, details } => write!(f, "{resource}: {details}"),
            Self::Status { resource, code } => write!(f, "{resource}: server returned {code}"),
            Self::Parse { resource, details } => {
                write!(f, "{resource}: unreadable response: {details}")
            }
            Self::Missing(id) => write!(f, "story {id}: no such item"),
        }
    }
}

impl std::error::Error for ApiError {}
