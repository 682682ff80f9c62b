/*
[INPUT]:  Task content JSON and directory listing JSON
[OUTPUT]: Typed tasks, pairs and listing entries
[POS]:    Data layer - task payload types
[UPDATE]: When the task file format or listing schema changes
*/

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use crate::http::{ArcError, Result};

/// One input grid with its expected output (absent for hidden test answers)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPair {
    pub input: Grid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Grid>,
}

/// Task file contents: `{ "train": [...], "test": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Task {
    pub train: Vec<TaskPair>,
    pub test: Vec<TaskPair>,
}

impl Task {
    /// Parse and validate a task document
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Entry of a subset directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntry {
    /// File name, e.g. `007bbfb7.json`
    pub name: String,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl TaskEntry {
    pub fn new(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            download_url: Some(download_url.into()),
        }
    }

    /// Name without the `.json` extension
    pub fn hash(&self) -> &str {
        self.name.strip_suffix(".json").unwrap_or(&self.name)
    }

    pub fn download_url(&self) -> Result<&str> {
        self.download_url.as_deref().ok_or_else(|| {
            ArcError::InvalidResponse(format!("listing entry {} has no download_url", self.name))
        })
    }
}
