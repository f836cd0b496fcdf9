//! Per-frame layout composition: settings, state, events, and the controller
//! that merges slot assignments with pattern-generated transforms.
pub mod controller;
pub mod events;
pub mod settings;
pub mod state;

pub type PhotoId = String;

/// A photo as supplied by the surrounding photo store. The layout engine
/// reads `id`, and `created_at` only to order newly arriving photos
/// deterministically; `url` is carried through untouched for the renderer.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Photo {
    pub id: PhotoId,
    pub url: String,
    pub created_at: Option<f64>,
}

impl Photo {
    pub fn new(id: impl Into<PhotoId>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            created_at: None,
        }
    }

    pub fn with_created_at(mut self, created_at: f64) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
