pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod prompt;
pub mod traits;
pub mod vertex;

pub use config::VertexConfig;
pub use error::{FitshotError, Result};
pub use models::*;
pub use orchestrator::Orchestrator;
pub use traits::GenerationBackend;
pub use vertex::{ImageClient, VertexClient};
