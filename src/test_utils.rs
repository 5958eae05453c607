//! Test data builders for app and view testing.

use std::sync::Arc;

use crate::api::{HnClient, Story, StoryId};
use crate::app::App;
use crate::batches::DEFAULT_MAX_STORIES;
use crate::theme::{ThemeVariant, default_for_variant};
use crate::time::{Clock, fixed_clock};

/// Fixed timestamp for deterministic tests: 2023-11-16 00:00:00 UTC
/// This is about 1 day after the base timestamp (1700000000) used in sample
/// data, so stories show as "a day ago".
pub const TEST_NOW: i64 = 1700092800;

pub struct StoryBuilder {
    story: Story,
}

impl Default for StoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StoryBuilder {
    pub fn new() -> Self {
        Self {
            story: Story {
                by: "testuser".to_string(),
                descendants: 10,
                id: 1,
                score: 100,
                time: 1700000000,
                title: "Test Story".to_string(),
                kind: "story".to_string(),
                url: "https://example.com".to_string(),
            },
        }
    }

    pub fn id(mut self, id: StoryId) -> Self {
        self.story.id = id;
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.story.title = title.to_string();
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.story.url = url.to_string();
        self
    }

    pub fn no_url(mut self) -> Self {
        self.story.url = String::new();
        self
    }

    pub fn score(mut self, score: u32) -> Self {
        self.story.score = score;
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.story.by = author.to_string();
        self
    }

    pub fn comments(mut self, count: u32) -> Self {
        self.story.descendants = count;
        self
    }

    pub fn time(mut self, time: u64) -> Self {
        self.story.time = time;
        self
    }

    pub fn build(self) -> Story {
        self.story
    }
}

/// One default story per id, in the given order.
pub fn stories_for(ids: &[StoryId]) -> Vec<Story> {
    ids.iter()
        .map(|&id| {
            StoryBuilder::new()
                .id(id)
                .title(&format!("Story {id}"))
                .build()
        })
        .collect()
}

pub struct TestAppBuilder {
    stories: Vec<Story>,
    selected_index: usize,
    show_help: bool,
    api_base: String,
    clock: Arc<dyn Clock>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            stories: Vec::new(),
            selected_index: 0,
            show_help: false,
            // Nothing listens here; tests that hit the network pass a mock server.
            api_base: "http://127.0.0.1:9".to_string(),
            clock: fixed_clock(TEST_NOW),
        }
    }

    /// Preloads stories as if their batches had been fetched.
    pub fn with_stories(mut self, stories: Vec<Story>) -> Self {
        self.stories = stories;
        self
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn show_help(mut self) -> Self {
        self.show_help = true;
        self
    }

    pub fn api_base(mut self, base: &str) -> Self {
        self.api_base = base.to_string();
        self
    }

    pub fn build(self) -> App {
        let client = HnClient::new(self.api_base).unwrap();
        let mut app = App::new(
            client,
            DEFAULT_MAX_STORIES,
            default_for_variant(ThemeVariant::Dark),
        );
        app.clock = self.clock;
        app.selected_index = self.selected_index;
        app.show_help = self.show_help;

        if !self.stories.is_empty() {
            let ids: Vec<StoryId> = self.stories.iter().map(|s| s.id).collect();
            let state = &mut app.state;
            state.publish_batches(&ids);
            let mut remaining = self.stories.into_iter();
            loop {
                let Some((index, batch)) = state.next_request() else {
                    break;
                };
                let chunk: Vec<Story> = remaining.by_ref().take(batch.len()).collect();
                state.complete_batch(index, chunk);
                if !state.load_more() {
                    break;
                }
            }
        }
        app
    }
}

pub fn sample_stories() -> Vec<Story> {
    vec![
        StoryBuilder::new()
            .id(1)
            .title("Show HN: A tiny terminal reader for Hacker News")
            .url("https://github.com/user/pico-hn")
            .score(142)
            .author("dang")
            .comments(47)
            .time(1700000000)
            .build(),
        StoryBuilder::new()
            .id(2)
            .title("Why Rust is the Future of Systems Programming")
            .url("https://example.com/rust-future")
            .score(89)
            .author("pg")
            .comments(23)
            .time(1700082000)
            .build(),
        StoryBuilder::new()
            .id(3)
            .title("Ask HN: What are you working on?")
            .no_url()
            .score(56)
            .author("sama")
            .comments(128)
            .time(1700092000)
            .build(),
        StoryBuilder::new()
            .id(4)
            .title("The unreasonable effectiveness of simple HTML")
            .url("https://blog.example.com/simple-html")
            .score(234)
            .author("tptacek")
            .comments(89)
            .time(1699700000)
            .build(),
        StoryBuilder::new()
            .id(5)
            .title("A Deep Dive into Linux Kernel Networking")
            .url("https://lwn.net/kernel-networking")
            .score(167)
            .author("patio11")
            .comments(34)
            .time(1690000000)
            .build(),
    ]
}
