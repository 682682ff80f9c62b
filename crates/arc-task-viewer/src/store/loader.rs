/*
[INPUT]:  TaskSource (HTTP or mock), task indices/hashes/files
[OUTPUT]: LoadOutcome per operation; session state replaced on success
[POS]:    Store layer - async loaders around SessionState
[UPDATE]: When adding load paths or changing caching rules
*/

use arc_task_adapter::{DatasetVersion, Subset, Task, TaskEntry, TaskSource};
use rand::Rng;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::store::{LoadOutcome, SessionState, StoreError, TaskUpdate};

/// Owns the session state and the source tasks are loaded from.
///
/// Loads do all their I/O before touching state, so a failed load leaves the
/// previous task fully intact.
pub struct TaskStore {
    state: SessionState,
    source: Arc<dyn TaskSource>,
}

impl TaskStore {
    pub fn new(source: Arc<dyn TaskSource>) -> Self {
        Self::with_state(source, SessionState::default())
    }

    pub fn with_state(source: Arc<dyn TaskSource>, state: SessionState) -> Self {
        Self { state, source }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    /// Fetch and cache the listing of `subset` for the active dataset version
    pub async fn load_tasks_metadata(&mut self, subset: Subset) -> LoadOutcome {
        match self.fetch_metadata(subset).await {
            Ok(count) => LoadOutcome::with_count(count),
            Err(err) => {
                warn!(%subset, error = %err, "error loading tasks metadata");
                LoadOutcome::failure(err)
            }
        }
    }

    /// Load a uniformly random task from the active subset
    pub async fn load_random_task(&mut self) -> LoadOutcome {
        let subset = self.state.subset();
        let result = async {
            let tasks = self.ensure_metadata(subset).await?;
            if tasks.is_empty() {
                return Err(StoreError::NotFound(format!(
                    "No tasks found in {subset} dataset"
                )));
            }
            let index = rand::thread_rng().gen_range(0..tasks.len());
            let entry = &tasks[index];
            let task = self
                .fetch_task(entry, "Failed to load random task")
                .await?;
            Ok::<_, StoreError>((task, entry.name.clone(), index, tasks.len()))
        }
        .await;

        match result {
            Ok((task, name, index, total)) => {
                self.apply(task, name, Some(index), Some(subset), Some(total));
                LoadOutcome::ok()
            }
            Err(err) => {
                warn!(error = %err, "error loading random task");
                LoadOutcome::failure(err)
            }
        }
    }

    /// Load the task at `index` of `subset`.
    ///
    /// Indices outside the listing are navigation failures, as are fetch
    /// failures once the index is known to be valid.
    pub async fn load_task(&mut self, index: i64, subset: Subset) -> LoadOutcome {
        let tasks = match self.ensure_metadata(subset).await {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(%subset, error = %err, "error loading task");
                return LoadOutcome::failure(err);
            }
        };

        if index < 0 {
            return LoadOutcome::navigation(StoreError::Range(
                "Task index cannot be negative".to_string(),
            ));
        }
        let index = index as usize;
        let Some(entry) = tasks.get(index) else {
            return LoadOutcome::navigation(StoreError::Range(
                "You've reached the last task".to_string(),
            ));
        };

        match self.fetch_task(entry, "Failed to load task").await {
            Ok(task) => {
                self.apply(task, entry.name.clone(), Some(index), Some(subset), Some(tasks.len()));
                LoadOutcome::ok()
            }
            Err(err) => {
                warn!(index, %subset, error = %err, "error loading task");
                LoadOutcome::navigation(err)
            }
        }
    }

    /// Load the task whose file is `<hash>.json` in `subset`
    pub async fn load_task_by_hash(&mut self, hash: &str, subset: Subset) -> LoadOutcome {
        let result = async {
            let tasks = self.ensure_metadata(subset).await?;
            let file_name = format!("{hash}.json");
            let index = tasks
                .iter()
                .position(|entry| entry.name == file_name)
                .ok_or_else(|| {
                    StoreError::NotFound(format!(
                        "Task with hash {hash} not found in {subset} dataset"
                    ))
                })?;
            let entry = &tasks[index];
            let task = self
                .fetch_task(entry, &format!("Failed to load task {hash}"))
                .await?;
            Ok::<_, StoreError>((task, entry.name.clone(), index, tasks.len()))
        }
        .await;

        match result {
            Ok((task, name, index, total)) => {
                self.apply(task, name, Some(index), Some(subset), Some(total));
                LoadOutcome::ok()
            }
            Err(err) => {
                warn!(hash, %subset, error = %err, "error loading task by hash");
                LoadOutcome::failure(err)
            }
        }
    }

    /// Import a task document from disk; the file name becomes the task name
    pub async fn load_task_from_file(&mut self, path: &Path) -> LoadOutcome {
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "error reading task file");
                return LoadOutcome::failure(StoreError::Read(format!(
                    "Error reading file: {err}"
                )));
            }
        };

        let task = match Task::from_json(&text) {
            Ok(task) => task,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "invalid task file");
                return LoadOutcome::failure(StoreError::Format(format!(
                    "Invalid JSON format: {err}"
                )));
            }
        };

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.apply(task, name, None, None, None);
        LoadOutcome::ok()
    }

    /// Switch dataset version, dropping listings cached for the old one
    pub fn set_dataset_version(&mut self, version: DatasetVersion) -> LoadOutcome {
        self.state.set_dataset_version(version);
        info!(dataset = %version, "dataset version changed");
        LoadOutcome::ok()
    }

    async fn fetch_metadata(&mut self, subset: Subset) -> Result<usize, StoreError> {
        let version = self.state.dataset_version();
        let tasks = self
            .source
            .list_tasks(version, subset)
            .await
            .map_err(|err| StoreError::from_fetch("Failed to load tasks metadata", &err))?;
        let count = tasks.len();
        info!(dataset = %version, %subset, count, "tasks metadata loaded");
        self.state.set_tasks_metadata(subset, tasks);
        Ok(count)
    }

    /// Cached listing for `subset`, fetched first when missing or empty
    async fn ensure_metadata(&mut self, subset: Subset) -> Result<Vec<TaskEntry>, StoreError> {
        let cached = self
            .state
            .tasks_metadata(subset)
            .filter(|tasks| !tasks.is_empty());
        if let Some(tasks) = cached {
            return Ok(tasks.to_vec());
        }

        self.fetch_metadata(subset).await?;
        Ok(self
            .state
            .tasks_metadata(subset)
            .map(<[TaskEntry]>::to_vec)
            .unwrap_or_default())
    }

    async fn fetch_task(&self, entry: &TaskEntry, context: &str) -> Result<Task, StoreError> {
        self.source
            .fetch_task(entry)
            .await
            .map_err(|err| StoreError::from_fetch(context, &err))
    }

    fn apply(
        &mut self,
        task: Task,
        name: String,
        index: Option<usize>,
        subset: Option<Subset>,
        total_count: Option<usize>,
    ) {
        info!(task = %name, train = task.train.len(), test = task.test.len(), "task loaded");
        self.state.set_task(TaskUpdate {
            train: task.train,
            test: task.test,
            name,
            index,
            subset,
            total_count,
        });
    }
}
