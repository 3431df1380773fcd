//! URL-safe naming for path segments.
//!
//! Tags, cameras and film simulations all end up as path segments or query
//! values in photo and share links. They share one slug convention so a link
//! can be parsed back into the same segments it was built from:
//!
//! - `"Street Photography"` → `"street-photography"`
//! - `"FUJIFILM"` + `"X100V"` → `"fujifilm-x100v"`
//! - `"classic_chrome"` → `"classic-chrome"`
//! - `"東京"` → `"東京"` (letters in any script are kept)
//!
//! ## Display Labels
//!
//! The reverse direction is lossy: [`label_from_slug`] only turns dashes back
//! into spaces. Labels that need real casing (film simulations, cameras) carry
//! their own tables.

const MAX_SLUG_LEN: usize = 80;

/// Turn an arbitrary label into a lowercase slug for use in paths.
///
/// - Lowercases letters, keeping non-ASCII ones (`"Café"` → `"café"`)
/// - Replaces anything that isn't alphanumeric with a dash
/// - Collapses consecutive dashes into one
/// - Strips leading and trailing dashes
/// - Truncates to `MAX_SLUG_LEN` characters (breaks at last dash before limit)
///
/// Slugs are not URL-encoded; [`paths`](crate::paths) encodes them when it
/// builds a segment.
pub fn slugify(label: &str) -> String {
    let mut collapsed = String::with_capacity(label.len());
    let mut prev_dash = false;
    for c in label.chars() {
        if c.is_alphanumeric() {
            collapsed.extend(c.to_lowercase());
            prev_dash = false;
        } else {
            if !prev_dash {
                collapsed.push('-');
            }
            prev_dash = true;
        }
    }

    let trimmed = collapsed.trim_matches('-');
    let Some((cut, _)) = trimmed.char_indices().nth(MAX_SLUG_LEN) else {
        return trimmed.to_string();
    };
    let truncated = &trimmed[..cut];
    match truncated.rfind('-') {
        Some(pos) => truncated[..pos].to_string(),
        None => truncated.to_string(),
    }
}

/// Join several labels into a single slug, skipping empty parts.
///
/// Used for camera keys, where either make or model may be missing.
pub fn slugify_parts(parts: &[Option<&str>]) -> String {
    let joined: Vec<String> = parts
        .iter()
        .flatten()
        .map(|p| slugify(p))
        .filter(|s| !s.is_empty())
        .collect();
    joined.join("-")
}

/// Display label for a slug: dashes become spaces.
pub fn label_from_slug(slug: &str) -> String {
    slug.replace('-', " ")
}

/// Whether an identifier can be used verbatim as a path segment.
///
/// Photo ids are opaque but must survive a round trip through a URL path
/// without escaping: ASCII alphanumerics, dashes and underscores only.
pub fn is_path_safe(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
