use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Length of the bottom garment. Defaults to `Regular`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthChoice {
    Cropped,
    Regular,
    Over,
}

impl Default for LengthChoice {
    fn default() -> Self {
        LengthChoice::Regular
    }
}

impl LengthChoice {
    pub fn clause(&self) -> &'static str {
        match self {
            LengthChoice::Cropped => "The length of the bottom is cropped, ending above the ankle.",
            LengthChoice::Regular => "The length of the bottom is normal, ending at the ankle.",
            LengthChoice::Over => {
                "The length of the bottom is over, covering the ankle and creating a slight drape."
            }
        }
    }
}

/// Fit of the bottom garment. Defaults to `Regular`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitChoice {
    Regular,
    Tapered,
    SemiWide,
    Wide,
}

impl Default for FitChoice {
    fn default() -> Self {
        FitChoice::Regular
    }
}

impl FitChoice {
    pub fn clause(&self) -> &'static str {
        match self {
            FitChoice::Regular => {
                "The fit of the bottom is regular, straight from the hip to the ankle."
            }
            FitChoice::Tapered => "The fit of the bottom is tapered, narrowing towards the ankle.",
            FitChoice::SemiWide => {
                "The fit of the bottom is semi-wide, with a slightly loose fit throughout."
            }
            FitChoice::Wide => {
                "The fit of the bottom is wide, with a loose and flowing fit throughout."
            }
        }
    }
}

/// Pose tags the user may combine freely. Compiled prompt text always emits
/// them in `CANONICAL` order, never in container iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoseTag {
    FrontAttention,
    FrontPosing,
    SidePosing,
    RearAttention,
}

impl PoseTag {
    pub const CANONICAL: [PoseTag; 4] = [
        PoseTag::FrontAttention,
        PoseTag::FrontPosing,
        PoseTag::SidePosing,
        PoseTag::RearAttention,
    ];

    pub fn clause(&self) -> &'static str {
        match self {
            PoseTag::FrontAttention => {
                "The model is standing naturally, looking straight ahead with hands at their side."
            }
            PoseTag::FrontPosing => {
                "The model is posing confidently towards the camera with one hand on their hip."
            }
            PoseTag::SidePosing => {
                "The model is posing at an angle, showing the side profile of the outfit."
            }
            PoseTag::RearAttention => {
                "The model is standing naturally, facing away from the camera with hands at their side."
            }
        }
    }
}

/// Semantic role of a reference image, in fixed submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageRole {
    Face,
    Top,
    Bottom,
    Background,
}

impl ImageRole {
    pub const ALL: [ImageRole; 4] = [
        ImageRole::Face,
        ImageRole::Top,
        ImageRole::Bottom,
        ImageRole::Background,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageRole::Face => "face",
            ImageRole::Top => "top",
            ImageRole::Bottom => "bottom",
            ImageRole::Background => "background",
        }
    }
}

/// Snapshot of one user interaction cycle: four optional reference images,
/// the styling choices, and free-text detail notes. Built fresh per request
/// and discarded once a result is produced.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub face_image: Option<Vec<u8>>,
    pub top_image: Option<Vec<u8>>,
    pub bottom_image: Option<Vec<u8>>,
    pub background_image: Option<Vec<u8>>,
    pub length_choice: LengthChoice,
    pub fit_choice: FitChoice,
    pub pose_selections: HashSet<PoseTag>,
    pub detail_text: String,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_face_image(mut self, data: Vec<u8>) -> Self {
        self.face_image = Some(data);
        self
    }

    pub fn with_top_image(mut self, data: Vec<u8>) -> Self {
        self.top_image = Some(data);
        self
    }

    pub fn with_bottom_image(mut self, data: Vec<u8>) -> Self {
        self.bottom_image = Some(data);
        self
    }

    pub fn with_background_image(mut self, data: Vec<u8>) -> Self {
        self.background_image = Some(data);
        self
    }

    pub fn with_length(mut self, choice: LengthChoice) -> Self {
        self.length_choice = choice;
        self
    }

    pub fn with_fit(mut self, choice: FitChoice) -> Self {
        self.fit_choice = choice;
        self
    }

    pub fn with_pose(mut self, pose: PoseTag) -> Self {
        self.pose_selections.insert(pose);
        self
    }

    pub fn with_detail_text(mut self, text: impl Into<String>) -> Self {
        self.detail_text = text.into();
        self
    }

    fn image_for(&self, role: ImageRole) -> Option<&Vec<u8>> {
        match role {
            ImageRole::Face => self.face_image.as_ref(),
            ImageRole::Top => self.top_image.as_ref(),
            ImageRole::Bottom => self.bottom_image.as_ref(),
            ImageRole::Background => self.background_image.as_ref(),
        }
    }

    /// Roles whose image payload is absent, in submission order.
    pub fn missing_roles(&self) -> Vec<ImageRole> {
        ImageRole::ALL
            .iter()
            .copied()
            .filter(|role| self.image_for(*role).is_none())
            .collect()
    }

    /// The four payloads tagged by role, in submission order. Only valid
    /// once `missing_roles` is empty.
    pub fn role_tagged_images(&self) -> Vec<super::RoleTaggedImage> {
        ImageRole::ALL
            .iter()
            .filter_map(|role| {
                self.image_for(*role).map(|data| super::RoleTaggedImage {
                    role: *role,
                    data: data.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_regular() {
        let state = SelectionState::new();
        assert_eq!(state.length_choice, LengthChoice::Regular);
        assert_eq!(state.fit_choice, FitChoice::Regular);
        assert!(state.pose_selections.is_empty());
        assert!(state.detail_text.is_empty());
    }

    #[test]
    fn missing_roles_reports_all_four_when_empty() {
        let state = SelectionState::new();
        assert_eq!(state.missing_roles(), ImageRole::ALL.to_vec());
    }

    #[test]
    fn missing_roles_names_only_absent_images() {
        let state = SelectionState::new()
            .with_face_image(vec![1])
            .with_bottom_image(vec![2]);
        assert_eq!(
            state.missing_roles(),
            vec![ImageRole::Top, ImageRole::Background]
        );
    }

    #[test]
    fn role_tagged_images_follow_submission_order() {
        let state = SelectionState::new()
            .with_background_image(vec![4])
            .with_bottom_image(vec![3])
            .with_top_image(vec![2])
            .with_face_image(vec![1]);
        let images = state.role_tagged_images();
        let roles: Vec<_> = images.iter().map(|img| img.role).collect();
        assert_eq!(roles, ImageRole::ALL.to_vec());
        assert_eq!(images[0].data, vec![1]);
        assert_eq!(images[3].data, vec![4]);
    }
}
