use crate::models::ImageRole;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FitshotError {
    /// One or more required reference images were absent at generation time.
    /// Raised before any backend call is made.
    #[error("Missing input image(s): {}", format_roles(.0))]
    MissingInput(Vec<ImageRole>),

    /// The backend could not be configured or reached at startup. Fatal to
    /// the generation pathway until corrected.
    #[error("Backend initialization error: {0}. Check that your Google Cloud credentials and project settings are valid.")]
    InitError(String),

    /// The backend was reachable but the request itself failed (quota,
    /// malformed payload, content policy, transient fault).
    #[error("Backend request error: {0}")]
    RequestError(String),

    /// The backend answered successfully but the payload was unusable.
    #[error("Backend response error: {0}")]
    ResponseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

fn format_roles(roles: &[ImageRole]) -> String {
    roles
        .iter()
        .map(|role| role.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, FitshotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_names_every_role() {
        let err = FitshotError::MissingInput(vec![ImageRole::Face, ImageRole::Background]);
        let msg = err.to_string();
        assert!(msg.contains("face"));
        assert!(msg.contains("background"));
        assert!(!msg.contains("top"));
    }

    #[test]
    fn request_error_carries_message_verbatim() {
        let err = FitshotError::RequestError("quota exceeded".to_string());
        assert!(err.to_string().contains("quota exceeded"));
    }
}
