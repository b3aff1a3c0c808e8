use crate::{
    error::{FitshotError, Result},
    models::{GeneratedImage, GenerationRequest, RoleTaggedImage, VertexPart, VertexResponse},
    traits::GenerationBackend,
};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use serde_json::{json, Value};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

#[derive(Clone)]
pub struct ImageClient {
    client: reqwest::Client,
    project_id: String,
    location: String,
    model_id: String,
    access_token: String,
}

impl ImageClient {
    pub fn new(
        client: reqwest::Client,
        project_id: String,
        location: String,
        model_id: String,
        access_token: String,
    ) -> Self {
        Self {
            client,
            project_id,
            location,
            model_id,
            access_token,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    fn endpoint(&self) -> String {
        format!(
            "https://{}-aiplatform.googleapis.com/v1/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
            self.location, self.project_id, self.location, self.model_id
        )
    }

    fn build_payload(prompt: &str, images: &[RoleTaggedImage]) -> Value {
        let mut parts = vec![json!({ "text": prompt })];
        for image in images {
            let encoded = general_purpose::STANDARD.encode(&image.data);
            parts.push(json!({
                "inlineData": {
                    "mimeType": sniff_mime(&image.data),
                    "data": encoded
                }
            }));
        }

        json!({
            "contents": [{ "role": "user", "parts": parts }],
            "generationConfig": {
                "responseModalities": ["TEXT", "IMAGE"]
            }
        })
    }

    fn extract_image(response: VertexResponse) -> Option<(String, Vec<u8>)> {
        for candidate in response.candidates.unwrap_or_default() {
            let parts = candidate
                .content
                .and_then(|content| content.parts)
                .unwrap_or_default();
            for part in parts {
                if let VertexPart::InlineData { inline_data } = part {
                    if inline_data.mime_type.starts_with("image/") {
                        if let Ok(bytes) = general_purpose::STANDARD.decode(inline_data.data) {
                            return Some((inline_data.mime_type, bytes));
                        }
                    }
                }
            }
        }
        None
    }
}

#[async_trait]
impl GenerationBackend for ImageClient {
    async fn submit(&self, request: GenerationRequest) -> Result<GeneratedImage> {
        let payload = Self::build_payload(&request.prompt, &request.images);

        log::info!(
            "Submitting generation request ({} reference images, model: {})",
            request.images.len(),
            self.model_id
        );
        log::debug!("Compiled prompt: {}", request.prompt);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.access_token)
            .timeout(REQUEST_TIMEOUT)
            .json(&payload)
            .send()
            .await
            .map_err(|e| FitshotError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FitshotError::RequestError(format!(
                "generation request failed with status {}: {}",
                status, body
            )));
        }

        let parsed: VertexResponse = response
            .json()
            .await
            .map_err(|e| FitshotError::SerializationError(e.to_string()))?;

        match Self::extract_image(parsed) {
            Some((mime_type, bytes)) => {
                log::info!("Received synthesized image ({}, {} bytes)", mime_type, bytes.len());
                Ok(GeneratedImage {
                    image_data: bytes,
                    model: self.model_id.clone(),
                })
            }
            None => Err(FitshotError::ResponseError(
                format!("no image returned by model {}", self.model_id),
            )),
        }
    }
}

/// Transport mime type for an inline image part. The payload stays opaque
/// otherwise; only the magic bytes are inspected.
fn sniff_mime(data: &[u8]) -> &'static str {
    if data.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "image/png"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageRole;

    #[test]
    fn sniff_mime_recognizes_common_formats() {
        assert_eq!(sniff_mime(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A]), "image/png");
        assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        let webp = b"RIFF\x00\x00\x00\x00WEBPVP8 ";
        assert_eq!(sniff_mime(webp), "image/webp");
        assert_eq!(sniff_mime(&[0x00, 0x01]), "image/png");
    }

    #[test]
    fn payload_holds_prompt_then_one_part_per_image() {
        let images = vec![
            RoleTaggedImage {
                role: ImageRole::Face,
                data: vec![0xFF, 0xD8, 0xFF, 0xE0],
            },
            RoleTaggedImage {
                role: ImageRole::Top,
                data: vec![0x89, b'P', b'N', b'G'],
            },
        ];
        let payload = ImageClient::build_payload("a prompt", &images);
        let parts = payload["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0]["text"], "a prompt");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[2]["inlineData"]["mimeType"], "image/png");
        let modalities = payload["generationConfig"]["responseModalities"]
            .as_array()
            .unwrap();
        assert_eq!(modalities.len(), 2);
    }

    #[test]
    fn extract_image_finds_first_inline_image_part() {
        let encoded = general_purpose::STANDARD.encode([1u8, 2, 3]);
        let raw = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "here is your image" },
                        { "inlineData": { "mimeType": "image/png", "data": encoded } }
                    ]
                }
            }]
        });
        let response: VertexResponse = serde_json::from_value(raw).unwrap();
        let (mime, bytes) = ImageClient::extract_image(response).unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[test]
    fn extract_image_ignores_text_only_candidates() {
        let raw = json!({
            "candidates": [{ "content": { "parts": [{ "text": "refused" }] } }]
        });
        let response: VertexResponse = serde_json::from_value(raw).unwrap();
        assert!(ImageClient::extract_image(response).is_none());
    }
}
