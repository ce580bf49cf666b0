//! Domain value types.

mod project;

pub use project::{ProjectId, ProjectIdError};
