//! HTML views.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.
//!
//! ## Views
//!
//! - **Photo page**: large image plus a side panel. What the panel shows is
//!   decided by [`display::select_panel`](crate::display::select_panel); the
//!   templates here only lay out the decision.
//! - **Share view**: the photo with its absolute URL and a copy button.
//! - **Redirect page**: meta-refresh stub sent when a share request names a
//!   photo that doesn't exist.
//! - **Index page**: a grid of every photo.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (palette injected from `[theme]`)
//! - `static/share.js`: Copy-to-clipboard on the share view

use crate::camera::camera_from_photo;
use crate::config::SiteConfig;
use crate::display::{DisplayOptions, DisplayPolicy, select_panel};
use crate::paths::{self, PathError};
use crate::resolve::ShareView;
use crate::share::{ShareFlags, build_share_path};
use crate::tag::tag_label;
use crate::types::{Photo, non_empty};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS_STATIC: &str = include_str!("../static/style.css");
const SHARE_JS: &str = include_str!("../static/share.js");

/// Full stylesheet: theme properties followed by the static rules.
pub fn site_css(config: &SiteConfig) -> String {
    format!("{}\n{}", config.theme.css(), CSS_STATIC)
}

/// Per-page inputs of the photo view.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhotoLargeOptions<'a> {
    /// Tag the visitor is browsing by, if any.
    pub primary_tag: Option<&'a str>,
    pub display: DisplayOptions,
    pub share: ShareFlags,
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

fn site_header(site_title: &str) -> Markup {
    html! {
        header.site-header {
            a.site-title href=(paths::PATH_ROOT) { (site_title) }
        }
    }
}

/// Inline style sizing the image box and showing the blur placeholder.
fn image_style(photo: &Photo) -> String {
    let mut style = format!("aspect-ratio: {};", photo.aspect_ratio);
    if let Some(blur) = non_empty(&photo.blur_data) {
        style.push_str(&format!(" background-image: url({blur});"));
    }
    style
}

/// The photo with its side panel.
pub fn photo_large(
    photo: &Photo,
    options: &PhotoLargeOptions,
    policy: &impl DisplayPolicy,
) -> Markup {
    let selection = select_panel(photo, options.primary_tag, options.display, policy);
    let visible = selection.visibility;
    let exposure = &selection.exposure;
    let camera = camera_from_photo(photo);
    let share_path = build_share_path(photo, options.primary_tag, options.share);

    html! {
        div.photo-large {
            div.photo-image {
                a href=(paths::path_for_photo(photo, options.primary_tag)) {
                    img src=(photo.url) alt=(photo.title()) style=(image_style(photo));
                }
            }
            div.photo-side {
                div.photo-meta {
                    a.photo-title href=(paths::path_for_photo(photo, None)) { (photo.title()) }
                    @if visible.caption {
                        div.photo-caption { (photo.caption().unwrap_or_default()) }
                        @if visible.caption_separator {
                            div.caption-separator { "\u{2014}" }
                        }
                    }
                    @if visible.tags {
                        div.photo-tags {
                            @for tag in &selection.tags {
                                @match paths::path_for_tag(tag) {
                                    Some(href) => a href=(href) { (tag_label(tag)) },
                                    None => span { (tag_label(tag)) },
                                }
                            }
                        }
                    }
                }
                div.photo-camera {
                    @if visible.camera {
                        @if let Some(camera) = &camera {
                            a.camera href=(paths::path_for_camera(camera)) {
                                (camera.display_name())
                            }
                        }
                        @if visible.film_simulation {
                            @if let Some(simulation) = photo.film_simulation() {
                                a.film-simulation href=(paths::path_for_film_simulation(simulation)) {
                                    (simulation.label())
                                }
                            }
                        }
                    }
                }
                div.photo-exif {
                    @if visible.exposure {
                        ul.exposure {
                            li {
                                (exposure.focal_length)
                                @if visible.focal_length_35mm {
                                    " "
                                    span class="focal-35mm" title="35mm equivalent" {
                                        (exposure.focal_length_35mm.as_deref().unwrap_or_default())
                                    }
                                }
                            }
                            li { (exposure.f_number) }
                            li { (exposure.exposure_time) }
                            li { (exposure.iso) }
                            li { (exposure.exposure_compensation) }
                        }
                    }
                }
                div.photo-footer {
                    div.photo-date { (photo.taken_at_naive_formatted) }
                    a.share-link href=(share_path) { "Share" }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders a photo detail page.
pub fn render_photo_page(
    photo: &Photo,
    options: &PhotoLargeOptions,
    config: &SiteConfig,
    css: &str,
) -> Markup {
    let content = html! {
        (site_header(&config.site.title))
        main {
            (photo_large(photo, options, &config.display.policy()))
        }
    };
    let title = format!("{} - {}", photo.title(), config.site.title);
    base_document(&title, css, Some("photo-view"), content)
}

/// Renders the share view of a resolved photo.
///
/// Fails only when the configured base URL can't be joined with the path.
pub fn render_share_page(
    view: &ShareView,
    config: &SiteConfig,
    css: &str,
) -> Result<Markup, PathError> {
    let photo = &view.photo;
    let photo_path = paths::path_for_photo(photo, view.tag.as_deref());
    let url = paths::absolute_url(&config.site.base_url, &photo_path)?;

    let content = html! {
        main.share-view {
            a href=(photo_path) {
                img src=(photo.url) alt=(photo.title()) style=(image_style(photo));
            }
            div.share-url {
                input type="text" readonly value=(url);
                button type="button" data-copy=(url) { "Copy" }
            }
            a.share-close href=(photo_path) { "Close" }
        }
        script { (PreEscaped(SHARE_JS)) }
    };
    let title = format!("Share {} - {}", photo.title(), config.site.title);
    Ok(base_document(&title, css, Some("share-view"), content))
}

/// Renders a stub that immediately navigates to `target`.
pub fn render_redirect_page(target: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta http-equiv="refresh" content={ "0; url=" (target) };
                link rel="canonical" href=(target);
                title { "Redirecting" }
            }
            body {
                a href=(target) { "Continue" }
            }
        }
    }
}

/// Renders the index page with every photo.
pub fn render_index(photos: &[Photo], config: &SiteConfig, css: &str) -> Markup {
    let content = html! {
        (site_header(&config.site.title))
        main.photo-grid {
            @for photo in photos {
                a href=(paths::path_for_photo(photo, None)) {
                    img src=(photo.url) alt=(photo.title()) loading="lazy";
                }
            }
        }
    };
    base_document(&config.site.title, css, None, content)
}

// ============================================================================
// Tests
// ============================================================================
