/*
[INPUT]:  Dataset version, subset, listing entries
[OUTPUT]: Task listings and task contents from any backing source
[POS]:    Source layer - abstraction between the task store and the network
[UPDATE]: When adding new source kinds or changing the fetch contract
*/

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::http::{ArcClient, ArcError, Result};
use crate::types::{DatasetVersion, Subset, Task, TaskEntry};

/// Where the task store gets listings and task contents from
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// List every task of a subset
    async fn list_tasks(&self, version: DatasetVersion, subset: Subset)
    -> Result<Vec<TaskEntry>>;

    /// Fetch the contents of a listed task
    async fn fetch_task(&self, entry: &TaskEntry) -> Result<Task>;
}

#[async_trait]
impl TaskSource for ArcClient {
    async fn list_tasks(
        &self,
        version: DatasetVersion,
        subset: Subset,
    ) -> Result<Vec<TaskEntry>> {
        ArcClient::list_tasks(self, version, subset).await
    }

    async fn fetch_task(&self, entry: &TaskEntry) -> Result<Task> {
        ArcClient::fetch_task(self, entry.download_url()?).await
    }
}

/// In-memory source for testing
#[derive(Debug, Default)]
pub struct MockTaskSource {
    listings: HashMap<(DatasetVersion, Subset), Vec<TaskEntry>>,
    tasks: HashMap<String, Task>,
    fail_listing: bool,
    list_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
}

impl MockTaskSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task under `name` in a subset listing
    pub fn with_task(
        mut self,
        version: DatasetVersion,
        subset: Subset,
        name: &str,
        task: Task,
    ) -> Self {
        let url = format!("mock://{}/{}/{}", version.number(), subset, name);
        self.listings
            .entry((version, subset))
            .or_default()
            .push(TaskEntry::new(name, url.clone()));
        self.tasks.insert(url, task);
        self
    }

    /// Register an empty listing for a subset
    pub fn with_empty_listing(mut self, version: DatasetVersion, subset: Subset) -> Self {
        self.listings.entry((version, subset)).or_default();
        self
    }

    /// Make every listing request fail
    pub fn failing_listings(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskSource for MockTaskSource {
    async fn list_tasks(
        &self,
        version: DatasetVersion,
        subset: Subset,
    ) -> Result<Vec<TaskEntry>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_listing {
            return Err(ArcError::InvalidResponse("listing unavailable".to_string()));
        }
        self.listings
            .get(&(version, subset))
            .cloned()
            .ok_or_else(|| ArcError::Api {
                code: 404,
                message: format!("no listing for {version} {subset}"),
            })
    }

    async fn fetch_task(&self, entry: &TaskEntry) -> Result<Task> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let url = entry.download_url()?;
        self.tasks.get(url).cloned().ok_or_else(|| ArcError::Api {
            code: 404,
            message: format!("no task at {url}"),
        })
    }
}
