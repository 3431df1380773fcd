//! The photo record shared by every module.
//!
//! Photos arrive as JSON records with EXIF values already extracted and
//! formatted for display. The core never writes them back.

use crate::simulation::FilmSimulation;
use serde::{Deserialize, Serialize};

/// Title shown for photos without one.
pub const UNTITLED: &str = "Untitled";

/// One image and its metadata.
///
/// Every formatted EXIF field is independently optional. A field that is
/// present but blank is treated the same as a missing one; read optional
/// strings through [`non_empty`] rather than matching on them directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Photo {
    /// Opaque, stable, unique identifier. Used verbatim in paths.
    pub id: String,
    /// Source URL of the full-size image.
    pub url: String,
    /// Width divided by height.
    pub aspect_ratio: f64,
    /// Tiny base64 placeholder shown while the image loads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Tag identifiers in stored order. Not deduplicated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Capture time as shown to visitors (naive, no timezone).
    #[serde(default)]
    pub taken_at_naive_formatted: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_length_formatted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_length_in_35mm_format_formatted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f_number_formatted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure_time_formatted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_formatted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure_compensation_formatted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub film_simulation: Option<FilmSimulation>,
}

impl Photo {
    /// Display title, falling back to [`UNTITLED`].
    pub fn title(&self) -> &str {
        non_empty(&self.title).unwrap_or(UNTITLED)
    }

    pub fn caption(&self) -> Option<&str> {
        non_empty(&self.caption)
    }

    /// The film simulation, unless its identifier is blank.
    pub fn film_simulation(&self) -> Option<&FilmSimulation> {
        self.film_simulation.as_ref().filter(|s| !s.is_blank())
    }
}

/// Read an optional string, treating blank values as absent.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::photo;

    #[test]
    fn non_empty_passes_values_through_trimmed() {
        assert_eq!(non_empty(&Some("  f/2.8 ".to_string())), Some("f/2.8"));
    }

    #[test]
    fn non_empty_treats_blank_as_absent() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some(" \t\n".to_string())), None);
    }

    #[test]
    fn title_falls_back_to_untitled() {
        let mut p = photo("abc");
        p.title = None;
        assert_eq!(p.title(), "Untitled");
        p.title = Some("   ".to_string());
        assert_eq!(p.title(), "Untitled");
        p.title = Some("Dusk".to_string());
        assert_eq!(p.title(), "Dusk");
    }

    #[test]
    fn blank_film_simulation_is_absent() {
        let mut p = photo("abc");
        p.film_simulation = Some(FilmSimulation::new(""));
        assert!(p.film_simulation().is_none());
        p.film_simulation = Some(FilmSimulation::new("velvia"));
        assert_eq!(p.film_simulation().map(|s| s.id()), Some("velvia"));
    }

    #[test]
    fn deserializes_sparse_record() {
        let json = r#"{
            "id": "abc",
            "url": "https://cdn.example.com/abc.jpg",
            "aspect_ratio": 1.5
        }"#;
        let p: Photo = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, "abc");
        assert!(p.tags.is_empty());
        assert!(p.caption.is_none());
        assert!(p.film_simulation.is_none());
        assert_eq!(p.taken_at_naive_formatted, "");
    }

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "id": "abc",
            "url": "https://cdn.example.com/abc.jpg",
            "aspect_ratio": 1.5,
            "caption": "Morning light",
            "tags": ["street", "tokyo"],
            "taken_at_naive_formatted": "12 MAR 2024 07:14",
            "make": "FUJIFILM",
            "model": "X100V",
            "focal_length_formatted": "23mm",
            "focal_length_in_35mm_format_formatted": "35mm",
            "f_number_formatted": "ƒ/2.0",
            "exposure_time_formatted": "1/250s",
            "iso_formatted": "ISO 400",
            "exposure_compensation_formatted": "-0.3ev",
            "film_simulation": "classic-chrome"
        }"#;
        let p: Photo = serde_json::from_str(json).unwrap();
        assert_eq!(p.tags, vec!["street", "tokyo"]);
        assert_eq!(p.film_simulation().map(|s| s.id()), Some("classic-chrome"));
        assert_eq!(p.caption(), Some("Morning light"));
    }

    #[test]
    fn unknown_field_rejected() {
        let json = r#"{"id": "a", "url": "u", "aspect_ratio": 1.0, "lens": "x"}"#;
        let result: Result<Photo, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
