use crate::{
    error::{FitshotError, Result},
    models::{GeneratedImage, GenerationRequest, SelectionState},
    prompt,
    traits::GenerationBackend,
};
use std::sync::Arc;

/// Drives one generation cycle: re-validates the selection, compiles the
/// instruction, and hands the request to the backend. Holds no per-request
/// state; every fault comes back as a typed error value.
#[derive(Clone)]
pub struct Orchestrator {
    backend: Arc<dyn GenerationBackend>,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    pub async fn generate(&self, selection: &SelectionState) -> Result<GeneratedImage> {
        let missing = selection.missing_roles();
        if !missing.is_empty() {
            log::warn!(
                "Generation rejected, missing image(s): {}",
                missing
                    .iter()
                    .map(|role| role.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            return Err(FitshotError::MissingInput(missing));
        }

        let request = GenerationRequest {
            prompt: prompt::compile(
                selection.length_choice,
                selection.fit_choice,
                &selection.pose_selections,
                &selection.detail_text,
            ),
            images: selection.role_tagged_images(),
        };

        self.backend.submit(request).await
    }
}
