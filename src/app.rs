use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::{ApiError, HnClient, Story, StoryId};
use crate::batches::{BatchList, max_batches};
use crate::pagination::Pagination;
use crate::theme::Theme;
use crate::time::Clock;

pub enum AsyncResult {
    StoryIds {
        task_id: u64,
        result: Result<Vec<StoryId>, ApiError>,
    },
    Batch {
        index: usize,
        task_id: u64,
        result: Result<Vec<Story>, ApiError>,
    },
}

#[derive(Debug)]
pub struct TaskInfo {
    pub id: u64,
    pub description: String,
    pub started_at: Instant,
}

#[derive(Debug)]
pub struct LogEntry {
    pub message: String,
}

/// Debug panel state: task tracking and log messages.
#[derive(Debug, Default)]
pub struct DebugState {
    pub visible: bool,
    pub running_tasks: Vec<TaskInfo>,
    pub log: VecDeque<LogEntry>,
    next_task_id: u64,
}

impl DebugState {
    const MAX_LOG_ENTRIES: usize = 50;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, msg: impl Into<String>) {
        self.log.push_back(LogEntry {
            message: msg.into(),
        });
        if self.log.len() > Self::MAX_LOG_ENTRIES {
            self.log.pop_front();
        }
    }

    pub fn start_task(&mut self, description: impl Into<String>) -> u64 {
        let id = self.next_task_id;
        self.next_task_id += 1;
        let desc = description.into();
        self.log(format!("Started: {}", desc));
        self.running_tasks.push(TaskInfo {
            id,
            description: desc,
            started_at: Instant::now(),
        });
        id
    }

    pub fn end_task(&mut self, id: u64, outcome: &str) {
        if let Some(pos) = self.running_tasks.iter().position(|t| t.id == id) {
            let task = self.running_tasks.remove(pos);
            let elapsed = task.started_at.elapsed();
            self.log(format!("{} {}: {:.2?}", task.description, outcome, elapsed));
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoaderStatus {
    #[default]
    Pending,
    Published,
    Failed,
}

/// Everything the story list is drawn from.
///
/// Each field has one writer: the batch list is written once by the id
/// loader, the index only moves through [`ViewState::load_more`], and
/// stories are only appended by [`ViewState::complete_batch`].
#[derive(Debug)]
pub struct ViewState {
    max_stories: usize,
    loader: LoaderStatus,
    batches: Option<BatchList>,
    pagination: Pagination,
    stories: Vec<Story>,
    /// First batch that has not been appended yet.
    next_batch: usize,
    in_flight: Option<usize>,
    stalled: Option<usize>,
}

impl ViewState {
    pub fn new(max_stories: usize) -> Self {
        Self {
            max_stories,
            loader: LoaderStatus::Pending,
            batches: None,
            pagination: Pagination::new(max_batches(max_stories)),
            stories: Vec::new(),
            next_batch: 0,
            in_flight: None,
            stalled: None,
        }
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn loader_status(&self) -> LoaderStatus {
        self.loader
    }

    pub fn current_batch(&self) -> usize {
        self.pagination.current()
    }

    /// Number of published batches, or the configured maximum before the
    /// id list has arrived.
    pub fn batch_count(&self) -> usize {
        self.batches
            .as_ref()
            .map_or(self.pagination.max_batches(), BatchList::len)
    }

    pub fn batch_list(&self) -> Option<&BatchList> {
        self.batches.as_ref()
    }

    pub fn completed_batches(&self) -> usize {
        self.next_batch
    }

    pub fn in_flight(&self) -> Option<usize> {
        self.in_flight
    }

    pub fn stalled(&self) -> Option<usize> {
        self.stalled
    }

    /// Nothing is pending: the id list has settled and no batch is in flight.
    pub fn is_idle(&self) -> bool {
        self.loader != LoaderStatus::Pending && self.in_flight.is_none()
    }

    /// Busy until the first batch lands, and again while any later batch
    /// is being fetched.
    pub fn load_more_busy(&self) -> bool {
        self.stories.is_empty() || self.in_flight.is_some()
    }

    pub fn can_load_more(&self) -> bool {
        self.pagination
            .can_advance(self.batches.as_ref().map(BatchList::len))
    }

    /// Publishes the ranked id list. Ignored if a list was already published.
    pub fn publish_batches(&mut self, ids: &[StoryId]) -> bool {
        if self.batches.is_some() {
            return false;
        }
        let batches = BatchList::partition(ids, self.max_stories);
        self.pagination.settle(batches.len());
        self.batches = Some(batches);
        self.loader = LoaderStatus::Published;
        true
    }

    pub fn loader_failed(&mut self) {
        if self.loader == LoaderStatus::Pending {
            self.loader = LoaderStatus::Failed;
        }
    }

    pub fn load_more(&mut self) -> bool {
        let available = self.batches.as_ref().map(BatchList::len);
        self.pagination.load_more(available)
    }

    /// The next batch to fetch, if any, marking it in flight.
    ///
    /// Batches are handed out strictly in order, one at a time, and only up
    /// to the current index. Each index is handed out at most once.
    pub fn next_request(&mut self) -> Option<(usize, Vec<StoryId>)> {
        if self.in_flight.is_some() || self.stalled.is_some() {
            return None;
        }
        if self.next_batch > self.pagination.current() {
            return None;
        }
        let ids = self.batches.as_ref()?.get(self.next_batch)?.to_vec();
        self.in_flight = Some(self.next_batch);
        Some((self.next_batch, ids))
    }

    /// Appends a fetched batch. Results for a batch that is not the one in
    /// flight are rejected.
    pub fn complete_batch(&mut self, index: usize, stories: Vec<Story>) -> bool {
        if self.in_flight != Some(index) {
            return false;
        }
        self.in_flight = None;
        self.stories.extend(stories);
        self.next_batch += 1;
        true
    }

    /// Marks the in-flight batch as failed. Nothing is appended and no later
    /// batch is handed out.
    pub fn fail_batch(&mut self, index: usize) -> bool {
        if self.in_flight != Some(index) {
            return false;
        }
        self.in_flight = None;
        self.stalled = Some(index);
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    PageDown,
    PageUp,
    OpenUrl,
    LoadMore,
    Quit,
    ToggleHelp,
    ToggleDebug,
}

pub struct App {
    pub state: ViewState,
    pub selected_index: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub client: HnClient,
    pub theme: Theme,
    pub clock: Arc<dyn Clock>,
    // Async task management
    pub result_tx: mpsc::Sender<AsyncResult>,
    pub result_rx: mpsc::Receiver<AsyncResult>,
    // Debug pane
    pub debug: DebugState,
}

impl App {
    pub fn new(client: HnClient, max_stories: usize, theme: Theme) -> Self {
        let (result_tx, result_rx) = mpsc::channel(10);
        Self {
            state: ViewState::new(max_stories),
            selected_index: 0,
            should_quit: false,
            show_help: false,
            client,
            theme,
            clock: crate::time::system_clock(),
            result_tx,
            result_rx,
            debug: DebugState::new(),
        }
    }

    /// Kicks off the one-time fetch of the ranked id list.
    pub fn start(&mut self) {
        let client = self.client.clone();
        let tx = self.result_tx.clone();
        let task_id = self.debug.start_task("Load top story ids");
        info!(api = client.base_url(), "loading top story ids");

        tokio::spawn(async move {
            let result = client.fetch_story_ids().await;
            let _ = tx.send(AsyncResult::StoryIds { task_id, result }).await;
        });
    }

    pub fn handle_async_result(&mut self, result: AsyncResult) {
        match result {
            AsyncResult::StoryIds { task_id, result } => match result {
                Ok(ids) => {
                    self.debug.end_task(task_id, "completed");
                    if self.state.publish_batches(&ids) {
                        if let Some(list) = self.state.batch_list() {
                            if list.is_empty() {
                                warn!("top story list is empty");
                            } else {
                                info!(
                                    ids = ids.len(),
                                    stories = list.total_ids(),
                                    batches = list.len(),
                                    "published story batches"
                                );
                            }
                        }
                        self.sync_fetches();
                    } else {
                        warn!("story ids arrived twice, keeping the first list");
                    }
                }
                Err(e) => {
                    self.debug.end_task(task_id, "failed");
                    self.debug.log(e.to_string());
                    warn!(error = %e, "failed to load story ids");
                    self.state.loader_failed();
                }
            },
            AsyncResult::Batch {
                index,
                task_id,
                result,
            } => match result {
                Ok(stories) => {
                    self.debug.end_task(task_id, "completed");
                    let count = stories.len();
                    if self.state.complete_batch(index, stories) {
                        debug!(index, count, "appended batch");
                        self.sync_fetches();
                    } else {
                        warn!(index, "discarding batch that was not in flight");
                    }
                }
                Err(e) => {
                    self.debug.end_task(task_id, "failed");
                    self.debug.log(format!("Batch {} stalled: {}", index + 1, e));
                    warn!(
                        index,
                        story = e.story_id(),
                        error = %e,
                        "batch failed, pagination stalled"
                    );
                    self.state.fail_batch(index);
                }
            },
        }
    }

    /// Requests the next batch whenever the batch list or the current index
    /// has moved ahead of what has been fetched.
    fn sync_fetches(&mut self) {
        if let Some((index, ids)) = self.state.next_request() {
            self.spawn_batch_fetch(index, ids);
        }
    }

    fn spawn_batch_fetch(&mut self, index: usize, ids: Vec<StoryId>) {
        let client = self.client.clone();
        let tx = self.result_tx.clone();
        let task_id = self
            .debug
            .start_task(format!("Load batch {} ({} stories)", index + 1, ids.len()));

        tokio::spawn(async move {
            let result = client.fetch_batch(&ids).await;
            let _ = tx
                .send(AsyncResult::Batch {
                    index,
                    task_id,
                    result,
                })
                .await;
        });
    }

    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::SelectNext => self.select_next(),
            Message::SelectPrev => self.select_prev(),
            Message::SelectFirst => self.select_first(),
            Message::SelectLast => self.select_last(),
            Message::PageDown => self.page_down(),
            Message::PageUp => self.page_up(),
            Message::OpenUrl => self.open_url(),
            Message::LoadMore => self.load_more(),
            Message::Quit => self.should_quit = true,
            Message::ToggleHelp => self.show_help = !self.show_help,
            Message::ToggleDebug => self.debug.toggle(),
        }
    }

    fn load_more(&mut self) {
        if self.state.load_more() {
            debug!(index = self.state.current_batch(), "advanced batch index");
            self.sync_fetches();
        }
    }

    /// Drives loading without a terminal until `target` batches have been
    /// asked for and everything in flight has settled, or loading stalls.
    pub async fn run_headless(&mut self, target: usize) {
        let target = target.max(1);
        self.start();
        while let Some(result) = self.result_rx.recv().await {
            self.handle_async_result(result);
            if !self.state.is_idle() {
                continue;
            }
            if self.state.stalled().is_some() || self.state.loader_status() == LoaderStatus::Failed
            {
                break;
            }
            if self.state.current_batch() + 1 < target && self.state.load_more() {
                self.sync_fetches();
                continue;
            }
            break;
        }
    }

    fn select_next(&mut self) {
        let count = self.state.stories().len();
        if count > 0 && self.selected_index < count - 1 {
            self.selected_index += 1;
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    fn select_first(&mut self) {
        self.selected_index = 0;
    }

    fn select_last(&mut self) {
        let count = self.state.stories().len();
        if count > 0 {
            self.selected_index = count - 1;
        }
    }

    fn page_down(&mut self) {
        let count = self.state.stories().len();
        if count > 0 {
            self.selected_index = (self.selected_index + 10).min(count - 1);
        }
    }

    fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(10);
    }

    fn open_url(&mut self) {
        let Some(story) = self.state.stories().get(self.selected_index) else {
            return;
        };
        if story.url.is_empty() {
            debug!(id = story.id, "story has no url");
            return;
        }
        if let Err(e) = open::that(&story.url) {
            warn!(url = %story.url, error = %e, "failed to open browser");
            self.debug.log(format!("Could not open {}", story.url));
        }
    }
}
