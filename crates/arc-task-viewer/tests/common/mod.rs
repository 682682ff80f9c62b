/*
[INPUT]:  Test fixtures for tasks and sources
[OUTPUT]: Shared builders for store and editor tests
[POS]:    Test infrastructure - shared across viewer test modules
[UPDATE]: When adding new fixtures
*/

#![allow(dead_code)]

use arc_task_adapter::{DatasetVersion, Grid, MockTaskSource, Subset, Task, TaskPair};
use arc_task_viewer::{SessionState, TaskStore};
use std::sync::Arc;

pub fn grid(rows: &[&[u8]]) -> Grid {
    let values: Vec<Vec<u8>> = rows.iter().map(|r| r.to_vec()).collect();
    Grid::from_values(values.len(), values[0].len(), &values)
}

/// Task with two test pairs; the first ships its expected output
pub fn task_with(seed: u8) -> Task {
    Task {
        train: vec![TaskPair {
            input: grid(&[&[seed, 0], &[0, seed]]),
            output: Some(grid(&[&[0, seed], &[seed, 0]])),
        }],
        test: vec![
            TaskPair {
                input: grid(&[&[seed, seed, 0], &[0, 0, 0]]),
                output: Some(grid(&[&[0, 0, seed], &[seed, seed, seed]])),
            },
            TaskPair {
                input: grid(&[&[seed]]),
                output: None,
            },
        ],
    }
}

/// Mock source with `count` training tasks named `task0.json`, `task1.json`, ...
pub fn mock_source(version: DatasetVersion, count: u8) -> MockTaskSource {
    (0..count).fold(MockTaskSource::new(), |source, i| {
        source.with_task(version, Subset::Training, &format!("task{i}.json"), task_with(i % 10))
    })
}

pub fn store_with(source: Arc<MockTaskSource>) -> TaskStore {
    TaskStore::with_state(
        source,
        SessionState::new(DatasetVersion::Arc2, Subset::Training),
    )
}

pub fn task_json() -> serde_json::Value {
    serde_json::json!({
        "train": [{"input": [[1, 0], [0, 1]], "output": [[0, 1], [1, 0]]}],
        "test": [{"input": [[2, 2, 2], [2, 0, 2]], "output": [[0, 0, 0], [0, 2, 0]]}]
    })
}
