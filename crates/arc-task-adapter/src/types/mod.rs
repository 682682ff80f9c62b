/*
[INPUT]:  Task payload schema and serde requirements
[OUTPUT]: Typed grids, tasks and dataset selectors
[POS]:    Data layer - type definitions for task data
[UPDATE]: When the payload schema changes or new types are added
*/

pub mod enums;
pub mod grid;
pub mod task;

pub use enums::*;
pub use grid::*;
pub use task::*;
