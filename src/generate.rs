//! Static site generation.
//!
//! Takes every photo in the store and writes the pages the path grammar in
//! [`paths`](crate::paths) can point at.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): grid of every photo
//! - **Photo pages** (`/p/{id}/index.html`): photo with its side panel
//! - **Share views** (`/p/{id}/share/index.html`)
//! - **Tag routes** (`/tag/{tag}/{id}/index.html` and `.../share/index.html`):
//!   the same pages with the tag as primary tag; their share links always
//!   carry the tag
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── p/
//! │   └── dscf1234/
//! │       ├── index.html
//! │       └── share/index.html
//! └── tag/
//!     └── street/
//!         └── dscf1234/
//!             ├── index.html
//!             └── share/index.html
//! ```
//!
//! Share links carrying camera or simulation context differ from the plain
//! share path only in their query string, so they land on the same file.
//!
//! Pages are rendered and written in parallel on the global rayon pool.

use crate::config::{ConfigError, SiteConfig};
use crate::paths::{self, PathError};
use crate::render::{self, PhotoLargeOptions};
use crate::resolve::ShareView;
use crate::share::ShareFlags;
use crate::store::{PhotoStore, StoreError};
use crate::types::Photo;
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Path error: {0}")]
    Path(#[from] PathError),
}

/// Pages written for one photo, as paths relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPhoto {
    pub id: String,
    pub title: String,
    pub pages: Vec<String>,
}

/// What a generation run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub photos: Vec<GeneratedPhoto>,
    /// Tag slugs that got at least one route.
    pub tags: BTreeSet<String>,
}

impl GenerateSummary {
    /// Total pages written, index included.
    pub fn page_count(&self) -> usize {
        1 + self.photos.iter().map(|p| p.pages.len()).sum::<usize>()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageKind {
    Photo,
    Share,
}

/// One page to render.
struct PageJob<'a> {
    photo: &'a Photo,
    tag: Option<&'a str>,
    kind: PageKind,
    url_path: String,
}

/// Load every photo from `store` and generate the site.
pub async fn build_site(
    store: &dyn PhotoStore,
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    config.validate()?;
    let mut photos = store.all_photos().await?;
    photos.sort_by(|a, b| a.id.cmp(&b.id));
    generate(&photos, config, output_dir)
}

/// Write the site for `photos` into `output_dir`.
pub fn generate(
    photos: &[Photo],
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    let css = render::site_css(config);
    fs::create_dir_all(output_dir)?;

    let index_html = render::render_index(photos, config, &css);
    fs::write(output_dir.join("index.html"), index_html.into_string())?;

    let mut summary = GenerateSummary::default();
    let mut jobs = Vec::new();
    for photo in photos {
        let mut generated = GeneratedPhoto {
            id: photo.id.clone(),
            title: photo.title().to_string(),
            pages: Vec::new(),
        };
        for tag in route_tags(photo) {
            if let Some(tag) = tag {
                summary.tags.insert(crate::naming::slugify(tag));
            }
            for kind in [PageKind::Photo, PageKind::Share] {
                let url_path = match kind {
                    PageKind::Photo => paths::path_for_photo(photo, tag),
                    PageKind::Share => paths::path_for_photo_share(photo, tag, None, None),
                };
                generated.pages.push(page_file(&url_path));
                jobs.push(PageJob {
                    photo,
                    tag,
                    kind,
                    url_path,
                });
            }
        }
        summary.photos.push(generated);
    }

    jobs.par_iter()
        .try_for_each(|job| write_page(job, config, &css, output_dir))?;

    Ok(summary)
}

/// Route contexts for a photo: untagged first, then one per distinct tag slug.
///
/// Tags that slug to nothing have no route of their own.
fn route_tags(photo: &Photo) -> Vec<Option<&str>> {
    let mut seen = BTreeSet::new();
    let mut routes = vec![None];
    for tag in &photo.tags {
        let slug = crate::naming::slugify(tag);
        if !slug.is_empty() && seen.insert(slug) {
            routes.push(Some(tag.as_str()));
        }
    }
    routes
}

/// Relative file that serves `url_path`.
///
/// Segments are decoded: static servers map `/tag/caf%C3%A9` to `tag/café`.
fn page_file(url_path: &str) -> String {
    let segments: Vec<String> = url_path
        .trim_matches('/')
        .split('/')
        .map(|segment| paths::decode_segment(segment).unwrap_or_else(|| segment.to_string()))
        .collect();
    format!("{}/index.html", segments.join("/"))
}

fn write_page(
    job: &PageJob,
    config: &SiteConfig,
    css: &str,
    output_dir: &Path,
) -> Result<(), GenerateError> {
    let markup = match job.kind {
        PageKind::Photo => {
            let mut share = config.share.flags();
            if job.tag.is_some() {
                share = share.or(ShareFlags {
                    tag: true,
                    ..ShareFlags::default()
                });
            }
            let options = PhotoLargeOptions {
                primary_tag: job.tag,
                display: config.display.options(),
                share,
            };
            render::render_photo_page(job.photo, &options, config, css)
        }
        PageKind::Share => {
            let view = ShareView {
                photo: job.photo.clone(),
                tag: job.tag.map(String::from),
            };
            render::render_share_page(&view, config, css)?
        }
    };

    let path: PathBuf = output_dir.join(page_file(&job.url_path));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, markup.into_string())?;
    debug!("Wrote {}", path.display());
    Ok(())
}
