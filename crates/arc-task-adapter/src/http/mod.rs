/*
[INPUT]:  HTTP client configuration and dataset API bases
[OUTPUT]: Typed listing and task responses
[POS]:    HTTP layer - task repository communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod tasks;

pub use error::{ArcError, Result};

pub use client::{ArcClient, ClientConfig};
