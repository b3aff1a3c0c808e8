use std::env;

pub const DEFAULT_LOCATION: &str = "asia-northeast3";
pub const DEFAULT_MODEL_ID: &str = "gemini-2.5-flash-image";

/// Process-wide backend settings, resolved once at startup. Missing project
/// or token surfaces as an init failure when the client is constructed,
/// never per request.
#[derive(Debug, Clone)]
pub struct VertexConfig {
    pub project_id: Option<String>,
    pub location: Option<String>,
    pub model_id: Option<String>,
    pub access_token: Option<String>,
}

impl Default for VertexConfig {
    fn default() -> Self {
        VertexConfig {
            project_id: None,
            location: None,
            model_id: None,
            access_token: None,
        }
    }
}

impl VertexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let project_id = env::var("VERTEX_PROJECT_ID").ok();
        let location = env::var("VERTEX_LOCATION").ok();
        let model_id = env::var("VERTEX_MODEL_ID").ok();
        let access_token = env::var("GOOGLE_ACCESS_TOKEN").ok();

        VertexConfig {
            project_id,
            location,
            model_id,
            access_token,
        }
    }

    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_chain() {
        let config = VertexConfig::new()
            .with_project("my-project")
            .with_location("us-central1")
            .with_model("gemini-2.5-flash-image")
            .with_access_token("token");
        assert_eq!(config.project_id.as_deref(), Some("my-project"));
        assert_eq!(config.location.as_deref(), Some("us-central1"));
        assert_eq!(config.model_id.as_deref(), Some("gemini-2.5-flash-image"));
        assert_eq!(config.access_token.as_deref(), Some("token"));
    }

    #[test]
    fn defaults_are_unset() {
        let config = VertexConfig::new();
        assert!(config.project_id.is_none());
        assert!(config.location.is_none());
    }
}
