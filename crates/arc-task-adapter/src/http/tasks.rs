/*
[INPUT]:  Dataset version, subset, listing entries
[OUTPUT]: Subset directory listings and validated task contents
[POS]:    HTTP layer - task listing/content endpoints (no auth required)
[UPDATE]: When endpoint paths or response formats change
*/

use reqwest::{Method, Url};
use tracing::debug;

use crate::http::{ArcClient, Result};
use crate::types::{DatasetVersion, Subset, Task, TaskEntry};

impl ArcClient {
    /// List the task files of a subset
    ///
    /// GET {api_base}/{subset}
    pub async fn list_tasks(
        &self,
        version: DatasetVersion,
        subset: Subset,
    ) -> Result<Vec<TaskEntry>> {
        let url = self.api_url(version, subset.as_str())?;
        debug!(%url, "listing tasks");
        let builder = self.request(Method::GET, url);
        self.send_json(builder).await
    }

    /// Fetch and validate a task file
    ///
    /// GET {download_url}
    pub async fn fetch_task(&self, download_url: &str) -> Result<Task> {
        let url = Url::parse(download_url)?;
        debug!(%url, "fetching task");
        let builder = self.request(Method::GET, url);
        self.send_json(builder).await
    }
}
