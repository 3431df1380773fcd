//! Photo resolution for page requests.
//!
//! A request names a photo by id. Resolution has exactly two terminal
//! outcomes: the photo exists and the page renders, or it doesn't and the
//! visitor is sent to the site root. "Not found" is an ordinary outcome, not
//! an error; errors are reserved for a store that failed to answer.

use crate::paths::PATH_ROOT;
use crate::store::{PhotoStore, StoreError};
use crate::types::Photo;
use log::{debug, info};

/// Outcome of a single photo lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(Photo),
    NotFound,
}

/// Look up `photo_id` once. Store failures propagate as-is.
pub async fn resolve(store: &dyn PhotoStore, photo_id: &str) -> Result<Resolution, StoreError> {
    debug!("Resolving photo {photo_id}");
    Ok(match store.get_photo(photo_id).await? {
        Some(photo) => Resolution::Found(photo),
        None => Resolution::NotFound,
    })
}

/// What the share view receives once its photo is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareView {
    pub photo: Photo,
    /// Tag from the request path, passed through untouched.
    pub tag: Option<String>,
}

/// What a share request turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum ShareOutcome {
    Render(ShareView),
    /// Navigate to this path instead of rendering.
    Redirect(&'static str),
}

/// Resolve a share request: render the share view or redirect to the root.
pub async fn resolve_share(
    store: &dyn PhotoStore,
    photo_id: &str,
    tag: Option<&str>,
) -> Result<ShareOutcome, StoreError> {
    match resolve(store, photo_id).await? {
        Resolution::Found(photo) => Ok(ShareOutcome::Render(ShareView {
            photo,
            tag: tag.map(String::from),
        })),
        Resolution::NotFound => {
            info!("Photo {photo_id} not found, redirecting to {PATH_ROOT}");
            Ok(ShareOutcome::Redirect(PATH_ROOT))
        }
    }
}
