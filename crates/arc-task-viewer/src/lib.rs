/*
[INPUT]:  Public API exports for arc-task-viewer crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod cli;
pub mod config;
pub mod grid;
pub mod render;
pub mod store;

// Re-export main types for convenience
pub use config::ViewerConfig;
pub use grid::{GridError, calculate_cell_size, color_for_symbol, flood_fill, parse_grid_size};
pub use store::{LoadOutcome, SessionState, StoreError, TaskStore, TaskUpdate};
