use serde::{Deserialize, Serialize};

use super::ImageRole;

/// One reference image payload tagged with its semantic role.
#[derive(Debug, Clone)]
pub struct RoleTaggedImage {
    pub role: ImageRole,
    pub data: Vec<u8>,
}

/// Everything one generation call needs, passed atomically to the backend.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub images: Vec<RoleTaggedImage>,
}

/// A synthesized image returned by the backend.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedImage {
    pub image_data: Vec<u8>,
    pub model: String,
}

// Wire structs for the Vertex `generateContent` response. Parts are untagged
// since the service mixes text and inline-image parts in one candidate.

#[derive(Debug, Deserialize)]
pub struct VertexResponse {
    pub candidates: Option<Vec<VertexCandidate>>,
}

#[derive(Debug, Deserialize)]
pub struct VertexCandidate {
    pub content: Option<VertexContent>,
}

#[derive(Debug, Deserialize)]
pub struct VertexContent {
    pub parts: Option<Vec<VertexPart>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum VertexPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: VertexInlineData,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexInlineData {
    pub mime_type: String,
    pub data: String,
}
