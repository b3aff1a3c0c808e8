use crate::{error::Result, models::GeneratedImage, models::GenerationRequest};
use async_trait::async_trait;

/// Narrow seam over any backend that accepts text plus multiple images and
/// returns one image. Each call is a single stateless request/response; no
/// retries or streaming at this layer.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn submit(&self, request: GenerationRequest) -> Result<GeneratedImage>;
}
