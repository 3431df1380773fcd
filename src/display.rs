//! Side-panel metadata selection.
//!
//! Decides which metadata groups of a photo are shown, independently of how
//! they are laid out. The result is a plain record of named booleans plus the
//! strings the exposure list displays, so every rule can be tested without
//! rendering any HTML.
//!
//! ## Rules
//!
//! | Group | Shown when |
//! |-------|------------|
//! | caption | caption present |
//! | separator | caption shown and at least one tag |
//! | tags | at least one tag |
//! | camera | `show_camera` and the policy allows camera data |
//! | film simulation | camera shown, `show_simulation`, simulation present |
//! | exposure | the policy allows EXIF data |
//! | 35mm annotation | 35mm-equivalent focal length present |
//!
//! Exposure compensation always has a line: its value, or [`PLACEHOLDER`].

use crate::camera::camera_from_photo;
use crate::tag::sort_tags;
use crate::types::{Photo, non_empty};

/// Shown in place of a missing exposure compensation.
pub const PLACEHOLDER: &str = "\u{2014}";

/// Per-page switches for the camera block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_camera: bool,
    pub show_simulation: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_camera: true,
            show_simulation: true,
        }
    }
}

/// Site-wide eligibility of camera and EXIF data for a photo.
pub trait DisplayPolicy {
    fn should_show_camera_data(&self, photo: &Photo) -> bool;
    fn should_show_exif_data(&self, photo: &Photo) -> bool;
}

/// Default policy: camera data whenever a camera can be derived, EXIF data
/// whenever EXIF is enabled and at least one exposure value is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExifDisplayPolicy {
    pub show_exif_data: bool,
}

impl Default for ExifDisplayPolicy {
    fn default() -> Self {
        Self {
            show_exif_data: true,
        }
    }
}

impl DisplayPolicy for ExifDisplayPolicy {
    fn should_show_camera_data(&self, photo: &Photo) -> bool {
        camera_from_photo(photo).is_some()
    }

    fn should_show_exif_data(&self, photo: &Photo) -> bool {
        self.show_exif_data
            && [
                &photo.focal_length_formatted,
                &photo.f_number_formatted,
                &photo.exposure_time_formatted,
                &photo.iso_formatted,
                &photo.exposure_compensation_formatted,
            ]
            .into_iter()
            .any(|field| non_empty(field).is_some())
    }
}

/// Which parts of the side panel render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelVisibility {
    pub caption: bool,
    pub caption_separator: bool,
    pub tags: bool,
    pub camera: bool,
    pub film_simulation: bool,
    pub exposure: bool,
    pub focal_length_35mm: bool,
}

/// Lines of the exposure list, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposureDetails {
    /// Empty when unformatted.
    pub focal_length: String,
    pub focal_length_35mm: Option<String>,
    pub f_number: String,
    pub exposure_time: String,
    pub iso: String,
    /// Never empty: falls back to [`PLACEHOLDER`].
    pub exposure_compensation: String,
}

impl ExposureDetails {
    pub fn from_photo(photo: &Photo) -> Self {
        let text = |field: &Option<String>| non_empty(field).unwrap_or_default().to_string();
        Self {
            focal_length: text(&photo.focal_length_formatted),
            focal_length_35mm: non_empty(&photo.focal_length_in_35mm_format_formatted)
                .map(String::from),
            f_number: text(&photo.f_number_formatted),
            exposure_time: text(&photo.exposure_time_formatted),
            iso: text(&photo.iso_formatted),
            exposure_compensation: non_empty(&photo.exposure_compensation_formatted)
                .unwrap_or(PLACEHOLDER)
                .to_string(),
        }
    }
}

/// Everything the side panel needs, decided up front.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSelection {
    pub visibility: PanelVisibility,
    /// Tags in display order (primary tag first).
    pub tags: Vec<String>,
    pub exposure: ExposureDetails,
}

/// Decide which metadata groups of `photo` render.
pub fn select_panel(
    photo: &Photo,
    primary_tag: Option<&str>,
    options: DisplayOptions,
    policy: &impl DisplayPolicy,
) -> PanelSelection {
    let tags = sort_tags(&photo.tags, primary_tag);
    let caption = photo.caption().is_some();
    let has_tags = !tags.is_empty();

    let camera = options.show_camera && policy.should_show_camera_data(photo);
    let film_simulation =
        camera && options.show_simulation && photo.film_simulation().is_some();

    let exposure = ExposureDetails::from_photo(photo);

    PanelSelection {
        visibility: PanelVisibility {
            caption,
            caption_separator: caption && has_tags,
            tags: has_tags,
            camera,
            film_simulation,
            exposure: policy.should_show_exif_data(photo),
            focal_length_35mm: exposure.focal_length_35mm.is_some(),
        },
        tags,
        exposure,
    }
}
