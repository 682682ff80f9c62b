/*
[INPUT]:  Loaded tasks, user edits, dataset/subset selections
[OUTPUT]: Session state mutated only through named transitions
[POS]:    Store layer - synchronous state container
[UPDATE]: When adding transitions or session fields
*/

use arc_task_adapter::{DatasetVersion, Grid, SYMBOL_COUNT, Subset, Symbol, TaskEntry, TaskPair};
use std::collections::HashMap;
use tracing::debug;

use crate::grid::flood_fill;
use crate::store::StoreError;

/// Payload for `SessionState::set_task`.
///
/// `index`, `subset` and `total_count` only overwrite the session when set.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub train: Vec<TaskPair>,
    pub test: Vec<TaskPair>,
    pub name: String,
    pub index: Option<usize>,
    pub subset: Option<Subset>,
    pub total_count: Option<usize>,
}

/// Everything the view renders: current task, active test pair, editable output
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    task_name: String,
    train: Vec<TaskPair>,
    test: Vec<TaskPair>,
    test_index: usize,
    input: Option<Grid>,
    output: Option<Grid>,
    selected_symbol: Symbol,
    dataset_version: DatasetVersion,
    subset: Subset,
    task_index: usize,
    total_count: usize,
    metadata: HashMap<Subset, Vec<TaskEntry>>,
}

impl SessionState {
    pub fn new(dataset_version: DatasetVersion, subset: Subset) -> Self {
        Self {
            dataset_version,
            subset,
            ..Self::default()
        }
    }

    // ---- transitions ----

    /// Switch dataset version; cached listings belong to the old version
    pub fn set_dataset_version(&mut self, version: DatasetVersion) {
        self.dataset_version = version;
        self.metadata.clear();
        self.total_count = 0;
    }

    /// Replace the current task and start over at test pair 0
    pub fn set_task(&mut self, update: TaskUpdate) {
        let TaskUpdate {
            train,
            test,
            name,
            index,
            subset,
            total_count,
        } = update;

        self.train = train;
        self.test = test;
        self.task_name = name;
        if let Some(index) = index {
            self.task_index = index;
        }
        if let Some(subset) = subset {
            self.subset = subset;
        }
        if let Some(total_count) = total_count {
            self.total_count = total_count;
        }
        self.test_index = 0;
        self.derive_pair_grids();
    }

    /// Move to the next test pair; no-op on the last one
    pub fn advance_test_pair(&mut self) -> bool {
        if self.test_index + 1 >= self.test.len() {
            return false;
        }
        self.test_index += 1;
        self.derive_pair_grids();
        true
    }

    /// Move to the previous test pair; no-op on the first one
    pub fn retreat_test_pair(&mut self) -> bool {
        if self.test_index == 0 {
            return false;
        }
        self.test_index -= 1;
        self.derive_pair_grids();
        true
    }

    pub fn set_output_grid(&mut self, grid: Grid) {
        self.output = Some(grid);
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: Symbol) -> Result<(), StoreError> {
        check_symbol(value)?;
        let output = self.output.as_mut().ok_or_else(StoreError::no_output)?;
        if output.set(row, col, value) {
            Ok(())
        } else {
            Err(out_of_bounds(row, col, output))
        }
    }

    /// Flood fill the output grid from `(row, col)` with the selected symbol
    pub fn fill_output(&mut self, row: usize, col: usize) -> Result<(), StoreError> {
        let symbol = self.selected_symbol;
        let output = self.output.as_mut().ok_or_else(StoreError::no_output)?;
        if output.get(row, col).is_none() {
            return Err(out_of_bounds(row, col, output));
        }
        flood_fill(output, row, col, symbol);
        Ok(())
    }

    pub fn copy_input_to_output(&mut self) {
        if let Some(input) = &self.input {
            self.output = Some(input.clone());
        }
    }

    /// Zero the output grid, keeping its current dimensions
    pub fn reset_output(&mut self) {
        self.output = match (&self.output, &self.input) {
            (Some(output), _) => Some(output.zeroed()),
            (None, Some(input)) => Some(input.zeroed()),
            (None, None) => None,
        };
    }

    /// New zero grid of `height x width` keeping the overlapping top-left cells
    pub fn resize_output(&mut self, height: usize, width: usize) {
        let resized = match &self.output {
            Some(output) => output.resized(height, width),
            None => Grid::zeros(height, width),
        };
        debug!(height, width, "output grid resized");
        self.output = Some(resized);
    }

    pub fn set_selected_symbol(&mut self, symbol: Symbol) -> Result<(), StoreError> {
        check_symbol(symbol)?;
        self.selected_symbol = symbol;
        Ok(())
    }

    pub fn set_tasks_metadata(&mut self, subset: Subset, tasks: Vec<TaskEntry>) {
        if subset == self.subset {
            self.total_count = tasks.len();
        }
        self.metadata.insert(subset, tasks);
    }

    /// Switch the active subset, keeping the loaded task but starting it
    /// over at test pair 0 with a fresh output grid
    pub fn set_subset(&mut self, subset: Subset) {
        self.subset = subset;
        if let Some(tasks) = self.metadata.get(&subset).filter(|tasks| !tasks.is_empty()) {
            self.total_count = tasks.len();
        }
        self.test_index = 0;
        self.derive_pair_grids();
    }

    // ---- accessors ----

    pub fn has_task(&self) -> bool {
        !self.task_name.is_empty() || !self.test.is_empty()
    }

    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    pub fn train_pairs(&self) -> &[TaskPair] {
        &self.train
    }

    pub fn test_pairs(&self) -> &[TaskPair] {
        &self.test
    }

    pub fn test_index(&self) -> usize {
        self.test_index
    }

    pub fn test_count(&self) -> usize {
        self.test.len()
    }

    /// Input grid of the active test pair
    pub fn current_input(&self) -> Option<&Grid> {
        self.input.as_ref()
    }

    /// The grid being edited
    pub fn current_output(&self) -> Option<&Grid> {
        self.output.as_ref()
    }

    /// Expected answer of the active test pair, when the task ships one
    pub fn expected_output(&self) -> Option<&Grid> {
        self.test
            .get(self.test_index)
            .and_then(|pair| pair.output.as_ref())
    }

    pub fn output_matches_expected(&self) -> Option<bool> {
        let expected = self.expected_output()?;
        Some(self.output.as_ref() == Some(expected))
    }

    pub fn selected_symbol(&self) -> Symbol {
        self.selected_symbol
    }

    pub fn dataset_version(&self) -> DatasetVersion {
        self.dataset_version
    }

    pub fn dataset_name(&self) -> &'static str {
        self.dataset_version.name()
    }

    pub fn subset(&self) -> Subset {
        self.subset
    }

    pub fn task_index(&self) -> usize {
        self.task_index
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn tasks_metadata(&self, subset: Subset) -> Option<&[TaskEntry]> {
        self.metadata.get(&subset).map(Vec::as_slice)
    }

    fn derive_pair_grids(&mut self) {
        self.input = self.test.get(self.test_index).map(|pair| pair.input.clone());
        self.output = self.input.as_ref().map(Grid::zeroed);
    }
}

fn check_symbol(symbol: Symbol) -> Result<(), StoreError> {
    if symbol < SYMBOL_COUNT {
        Ok(())
    } else {
        Err(StoreError::Range(format!(
            "Symbol {symbol} is out of range, expected 0-{}",
            SYMBOL_COUNT - 1
        )))
    }
}

fn out_of_bounds(row: usize, col: usize, grid: &Grid) -> StoreError {
    let (height, width) = grid.dimensions();
    StoreError::Range(format!(
        "Cell ({row}, {col}) is outside the {height}x{width} output grid"
    ))
}
