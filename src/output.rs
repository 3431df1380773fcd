//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every photo leads with its positional index and title; ids, cameras and
//! output files follow as indented context lines. The listing reads as a
//! content inventory while still naming the record behind each entry.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Photos
//! 001 Neon
//!     Id: dscf1234
//!     Camera: FUJIFILM X100V (Classic Chrome)
//!     Tags: street, night
//! 002 Untitled
//!     Id: dscf1300
//!
//! 2 photos, 2 tags
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! 001 Neon → p/dscf1234/index.html
//!     p/dscf1234/share/index.html
//!     tag/street/dscf1234/index.html
//!     tag/street/dscf1234/share/index.html
//!
//! Generated 1 photo, 5 pages, 1 tag
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::camera::camera_from_photo;
use crate::generate::GenerateSummary;
use crate::paths::ShareRoute;
use crate::resolve::ShareOutcome;
use crate::types::Photo;
use std::collections::BTreeSet;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 photo`, `2 photos`.
fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Camera line: display name, with the film simulation in parentheses.
fn camera_line(photo: &Photo) -> Option<String> {
    let camera = camera_from_photo(photo)?;
    Some(match photo.film_simulation() {
        Some(simulation) => format!("{} ({})", camera.display_name(), simulation.label()),
        None => camera.display_name(),
    })
}

// ============================================================================
// Check
// ============================================================================

/// Format the photo inventory printed by `check`.
pub fn format_check_output(photos: &[Photo]) -> Vec<String> {
    let mut lines = vec!["Photos".to_string()];
    let mut tags = BTreeSet::new();

    for (idx, photo) in photos.iter().enumerate() {
        lines.push(format!("{} {}", format_index(idx + 1), photo.title()));
        lines.push(format!("{}Id: {}", indent(1), photo.id));
        if let Some(camera) = camera_line(photo) {
            lines.push(format!("{}Camera: {}", indent(1), camera));
        }
        let photo_tags: Vec<&str> = photo
            .tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        if !photo_tags.is_empty() {
            lines.push(format!("{}Tags: {}", indent(1), photo_tags.join(", ")));
            tags.extend(photo_tags);
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{}, {}",
        count(photos.len(), "photo"),
        count(tags.len(), "tag")
    ));
    lines
}

pub fn print_check_output(photos: &[Photo]) {
    for line in format_check_output(photos) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the pages written by a build.
pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    let mut lines = vec!["Home \u{2192} index.html".to_string()];

    for (idx, photo) in summary.photos.iter().enumerate() {
        let mut pages = photo.pages.iter();
        match pages.next() {
            Some(first) => lines.push(format!(
                "{} {} \u{2192} {}",
                format_index(idx + 1),
                photo.title,
                first
            )),
            None => lines.push(format!("{} {}", format_index(idx + 1), photo.title)),
        }
        for page in pages {
            lines.push(format!("{}{}", indent(1), page));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}, {}",
        count(summary.photos.len(), "photo"),
        count(summary.page_count(), "page"),
        count(summary.tags.len(), "tag")
    ));
    lines
}

pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Share
// ============================================================================

/// A lookup that found nothing and sends the visitor to `target`.
pub fn format_not_found(photo_id: &str, target: &str) -> String {
    format!("{} not found \u{2192} redirect to {}", photo_id, target)
}

/// Describe the context a share path carries.
///
/// ```text
/// /tag/street/dscf1234/share?camera=fujifilm-x100v
/// → dscf1234, tag street, camera fujifilm-x100v
/// ```
pub fn format_share_route(route: &ShareRoute) -> String {
    let mut line = route.photo_id.clone();
    let context = [
        ("tag", &route.tag),
        ("camera", &route.camera),
        ("simulation", &route.simulation),
    ];
    for (name, value) in context {
        if let Some(value) = value {
            line.push_str(&format!(", {name} {value}"));
        }
    }
    line
}

/// Describe a share outcome in one line.
pub fn format_share_outcome(photo_id: &str, outcome: &ShareOutcome) -> String {
    match outcome {
        ShareOutcome::Render(view) => match &view.tag {
            Some(tag) => format!(
                "{} ({}) \u{2192} share view, tag {}",
                view.photo.title(),
                photo_id,
                tag
            ),
            None => format!("{} ({}) \u{2192} share view", view.photo.title(), photo_id),
        },
        ShareOutcome::Redirect(target) => format_not_found(photo_id, target),
    }
}

// ============================================================================
// Tests
// ============================================================================
