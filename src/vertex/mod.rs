pub mod image_client;

use crate::{
    config::{VertexConfig, DEFAULT_LOCATION, DEFAULT_MODEL_ID},
    error::{FitshotError, Result},
};

pub use image_client::ImageClient;

/// Entry point to the Vertex AI backend. Built once at startup; missing
/// project or credentials fail here rather than on a per-request basis.
#[derive(Clone)]
pub struct VertexClient {
    image_client: ImageClient,
}

impl VertexClient {
    pub fn new(config: VertexConfig) -> Result<Self> {
        let project_id = config
            .project_id
            .clone()
            .ok_or_else(|| FitshotError::InitError("no project id configured".to_string()))?;
        let access_token = config
            .access_token
            .clone()
            .ok_or_else(|| FitshotError::InitError("no access token configured".to_string()))?;
        let location = config
            .location
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());
        let model_id = config
            .model_id
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| FitshotError::InitError(e.to_string()))?;

        log::info!(
            "Vertex client initialized (project: {}, location: {}, model: {})",
            project_id,
            location,
            model_id
        );

        Ok(Self {
            image_client: ImageClient::new(client, project_id, location, model_id, access_token),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_without_project_is_an_init_error() {
        let config = VertexConfig::new().with_access_token("token");
        match VertexClient::new(config) {
            Err(FitshotError::InitError(msg)) => assert!(msg.contains("project")),
            other => panic!("expected InitError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn new_without_token_is_an_init_error() {
        let config = VertexConfig::new().with_project("my-project");
        match VertexClient::new(config) {
            Err(FitshotError::InitError(msg)) => assert!(msg.contains("token")),
            other => panic!("expected InitError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn location_and_model_fall_back_to_defaults() {
        let config = VertexConfig::new()
            .with_project("my-project")
            .with_access_token("token");
        let client = VertexClient::new(config).unwrap();
        assert_eq!(client.image().location(), DEFAULT_LOCATION);
        assert_eq!(client.image().model_id(), DEFAULT_MODEL_ID);
    }
}
