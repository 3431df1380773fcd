//! Shared test utilities for the photo-folio test suite.
//!
//! Provides photo record builders and fixture writers.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_photo(tmp.path(), &photo("abc"));
//! let store = JsonDirStore::open(tmp.path()).unwrap();
//! ```

use std::path::Path;

use crate::simulation::FilmSimulation;
use crate::types::Photo;

// =========================================================================
// Photo builders
// =========================================================================

/// A photo with only the required fields set.
pub fn bare_photo(id: &str) -> Photo {
    Photo {
        id: id.to_string(),
        url: format!("https://cdn.example.com/{id}.jpg"),
        aspect_ratio: 1.5,
        blur_data: None,
        title: None,
        caption: None,
        tags: Vec::new(),
        taken_at_naive_formatted: String::new(),
        make: None,
        model: None,
        focal_length_formatted: None,
        focal_length_in_35mm_format_formatted: None,
        f_number_formatted: None,
        exposure_time_formatted: None,
        iso_formatted: None,
        exposure_compensation_formatted: None,
        film_simulation: None,
    }
}

/// A photo with every field populated.
///
/// Camera `FUJIFILM X100V`, simulation `classic-chrome`, tags
/// `["street", "night"]`, caption `"Shinjuku after rain"`.
pub fn photo(id: &str) -> Photo {
    let some = |s: &str| Some(s.to_string());
    Photo {
        title: some("Neon"),
        caption: some("Shinjuku after rain"),
        tags: vec!["street".to_string(), "night".to_string()],
        taken_at_naive_formatted: "12 MAR 2024 21:14".to_string(),
        make: some("FUJIFILM"),
        model: some("X100V"),
        focal_length_formatted: some("23mm"),
        focal_length_in_35mm_format_formatted: some("35mm"),
        f_number_formatted: some("ƒ/2.0"),
        exposure_time_formatted: some("1/125s"),
        iso_formatted: some("ISO 1600"),
        exposure_compensation_formatted: some("-0.3ev"),
        film_simulation: Some(FilmSimulation::new("classic-chrome")),
        ..bare_photo(id)
    }
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Write `photo` as `<dir>/<id>.json`.
pub fn write_photo(dir: &Path, photo: &Photo) {
    let json = serde_json::to_string_pretty(photo).unwrap();
    std::fs::write(dir.join(format!("{}.json", photo.id)), json).unwrap();
}
