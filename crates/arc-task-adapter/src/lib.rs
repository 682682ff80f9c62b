/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public ARC task adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod source;
pub mod types;

// Re-export commonly used types from http
pub use http::{ArcClient, ArcError, ClientConfig, Result};

pub use source::{MockTaskSource, TaskSource};

// Re-export all types
pub use types::*;
