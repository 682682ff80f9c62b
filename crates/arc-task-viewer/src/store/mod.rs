/*
[INPUT]:  TaskSource plus user actions from the view
[OUTPUT]: Session state, transitions, async loaders and their outcomes
[POS]:    Store layer - single owner of viewer session state
[UPDATE]: When adding store modules or exports
*/

pub mod loader;
pub mod outcome;
pub mod state;

pub use loader::TaskStore;
pub use outcome::{LoadOutcome, StoreError};
pub use state::{SessionState, TaskUpdate};
