//! Site path grammar.
//!
//! ```text
//! /                                   root (redirect target)
//! /p/{id}                             photo
//! /tag/{tag}/{id}                     photo, browsed by tag
//! /p/{id}/share                       share view
//! /tag/{tag}/{id}/share               share view with tag context
//!     ?camera={make-model}            camera context
//!     &simulation={preset}            film simulation context
//! /tag/{tag}                          tag listing
//! /shot-on/{make-model}               camera listing
//! /film/{preset}                      film simulation listing
//! ```
//!
//! Tags, cameras and presets are slugged with [`naming::slugify`] and then
//! percent-encoded, so `東京` becomes `/tag/%E6%9D%B1%E4%BA%AC`. Photo ids are
//! used verbatim. Query parameters always appear in the order `camera`,
//! `simulation`, so equal inputs give byte-identical paths.

use crate::camera::Camera;
use crate::naming;
use crate::simulation::FilmSimulation;
use crate::types::Photo;
use thiserror::Error;
use url::Url;
use url::form_urlencoded;

pub const PATH_ROOT: &str = "/";

const PREFIX_PHOTO: &str = "p";
const PREFIX_TAG: &str = "tag";
const PREFIX_CAMERA: &str = "shot-on";
const PREFIX_FILM_SIMULATION: &str = "film";
const SEGMENT_SHARE: &str = "share";

const PARAM_CAMERA: &str = "camera";
const PARAM_SIMULATION: &str = "simulation";

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Percent-encode a slug for use as one path segment.
fn encode_segment(slug: &str) -> String {
    form_urlencoded::byte_serialize(slug.as_bytes()).collect()
}

/// Decode a segment written by [`encode_segment`].
///
/// `None` for empty segments and for ones holding characters the encoder
/// always escapes.
pub fn decode_segment(segment: &str) -> Option<String> {
    if segment.is_empty() || segment.contains(['&', '=', '+']) {
        return None;
    }
    form_urlencoded::parse(segment.as_bytes())
        .next()
        .map(|(decoded, _)| decoded.into_owned())
}

/// Encoded tag segment, or `None` when the tag slugs to nothing.
fn tag_segment(tag: &str) -> Option<String> {
    let slug = naming::slugify(tag);
    (!slug.is_empty()).then(|| encode_segment(&slug))
}

/// Tag listing path. `None` for tags with nothing to slug (`"!!"`).
pub fn path_for_tag(tag: &str) -> Option<String> {
    tag_segment(tag).map(|segment| format!("/{PREFIX_TAG}/{segment}"))
}

pub fn path_for_camera(camera: &Camera) -> String {
    format!("/{PREFIX_CAMERA}/{}", encode_segment(&camera.key()))
}

pub fn path_for_film_simulation(simulation: &FilmSimulation) -> String {
    format!(
        "/{PREFIX_FILM_SIMULATION}/{}",
        encode_segment(&simulation.slug())
    )
}

/// Path of a photo page, nested under a tag when one is given.
pub fn path_for_photo(photo: &Photo, tag: Option<&str>) -> String {
    match tag.and_then(tag_segment) {
        Some(segment) => format!("/{PREFIX_TAG}/{segment}/{}", photo.id),
        None => format!("/{PREFIX_PHOTO}/{}", photo.id),
    }
}

/// Path of a photo's share view carrying whichever context is given.
///
/// Elements that slug to nothing are left out, the same as `None`.
pub fn path_for_photo_share(
    photo: &Photo,
    tag: Option<&str>,
    camera: Option<&Camera>,
    simulation: Option<&FilmSimulation>,
) -> String {
    let path = format!("{}/{SEGMENT_SHARE}", path_for_photo(photo, tag));

    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut has_query = false;
    if let Some(key) = camera.map(Camera::key).filter(|k| !k.is_empty()) {
        query.append_pair(PARAM_CAMERA, &key);
        has_query = true;
    }
    if let Some(slug) = simulation.map(FilmSimulation::slug).filter(|s| !s.is_empty()) {
        query.append_pair(PARAM_SIMULATION, &slug);
        has_query = true;
    }

    if has_query {
        format!("{path}?{}", query.finish())
    } else {
        path
    }
}

/// Resolve a site path against the configured base URL.
pub fn absolute_url(base_url: &str, path: &str) -> Result<String, PathError> {
    let base = Url::parse(base_url)?;
    Ok(base.join(path)?.to_string())
}

/// A share path broken back into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRoute {
    pub photo_id: String,
    /// Decoded tag slug.
    pub tag: Option<String>,
    /// Camera key (`make-model` slug).
    pub camera: Option<String>,
    /// Film simulation slug.
    pub simulation: Option<String>,
}

/// Parse a share path produced by [`path_for_photo_share`].
///
/// Returns `None` for anything that isn't a share path. Unknown query
/// parameters are ignored; for repeated ones the first value wins.
pub fn parse_share_path(path: &str) -> Option<ShareRoute> {
    let (path, query) = match path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (path, None),
    };

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let (tag, photo_id) = match segments.as_slice() {
        [PREFIX_PHOTO, id, SEGMENT_SHARE] => (None, *id),
        [PREFIX_TAG, tag, id, SEGMENT_SHARE] => (Some(decode_segment(tag)?), *id),
        _ => return None,
    };
    if !naming::is_path_safe(photo_id) {
        return None;
    }

    let mut camera = None;
    let mut simulation = None;
    if let Some(query) = query {
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match &*key {
                PARAM_CAMERA if camera.is_none() => camera = Some(value.into_owned()),
                PARAM_SIMULATION if simulation.is_none() => {
                    simulation = Some(value.into_owned())
                }
                _ => {}
            }
        }
    }

    Some(ShareRoute {
        photo_id: photo_id.to_string(),
        tag,
        camera,
        simulation,
    })
}
