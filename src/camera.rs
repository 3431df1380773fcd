//! Cameras derived from photo records.
//!
//! A camera is never stored. It is recomputed from a photo's `make` and
//! `model` fields every time it is needed, and is absent when neither field
//! carries a value.

use crate::naming;
use crate::types::{Photo, non_empty};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Camera {
    pub make: Option<String>,
    pub model: Option<String>,
}

/// Derive the camera a photo was taken with.
///
/// Returns `None` when both make and model are missing or blank.
pub fn camera_from_photo(photo: &Photo) -> Option<Camera> {
    let make = non_empty(&photo.make).map(String::from);
    let model = non_empty(&photo.model).map(String::from);
    if make.is_none() && model.is_none() {
        None
    } else {
        Some(Camera { make, model })
    }
}

impl Camera {
    /// Slug identifying the camera in paths: `make-model`.
    pub fn key(&self) -> String {
        naming::slugify_parts(&[self.make.as_deref(), self.model.as_deref()])
    }

    /// Name shown to visitors.
    ///
    /// Many bodies repeat the make in the model string (`Canon` +
    /// `Canon EOS R5`); the make is dropped in that case.
    pub fn display_name(&self) -> String {
        match (self.make.as_deref(), self.model.as_deref()) {
            (Some(make), Some(model)) => {
                if model.to_lowercase().starts_with(&make.to_lowercase()) {
                    model.to_string()
                } else {
                    format!("{make} {model}")
                }
            }
            (Some(make), None) => make.to_string(),
            (None, Some(model)) => model.to_string(),
            (None, None) => String::new(),
        }
    }
}
