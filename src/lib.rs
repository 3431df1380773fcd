//! # Photo Folio
//!
//! Photo detail and share pages for a photography portfolio. Photos are
//! records with an image URL, EXIF-derived display strings, tags and an
//! optional film simulation; this crate decides what a photo page shows and
//! how its share links are formed.
//!
//! # Request Flow
//!
//! ```text
//! photo id ─→ resolve ─→ Found(photo) ─→ display::select_panel ─→ render
//!                    └─→ NotFound ─────→ Redirect("/")
//! ```
//!
//! A page does one awaited store lookup; everything after it is pure.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | The `Photo` record and blank-field handling |
//! | [`camera`] | `Camera` derived from make and model |
//! | [`simulation`] | Film simulation presets and their labels |
//! | [`tag`] | Tag ordering around a primary tag |
//! | [`naming`] | Slugs and path-safe ids |
//! | [`paths`] | Site path grammar, share path parsing, absolute URLs |
//! | [`display`] | Which panel groups a photo page shows |
//! | [`share`] | Share path composition from opt-in flags |
//! | [`store`] | `PhotoStore` trait, JSON directory store, memoizing cache |
//! | [`resolve`] | Lookup outcomes: render or redirect |
//! | [`render`] | Maud views for photo, share, redirect and index pages |
//! | [`generate`] | Writes every route as a static site |
//! | [`config`] | `config.toml` loading, validation and theme CSS |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Decisions Are Data
//!
//! [`display::select_panel`] returns a plain struct of booleans plus the
//! values to show. Templates never inspect a photo to decide visibility, so
//! every visibility rule is testable without rendering HTML.
//!
//! ## Not Found Is Not an Error
//!
//! [`resolve::resolve`] returns [`resolve::Resolution::NotFound`] for a
//! missing photo and reserves `Err` for a store that failed to answer. The
//! share view turns `NotFound` into a redirect to [`paths::PATH_ROOT`].
//!
//! ## Silent Omission in Share Links
//!
//! Share context is opt-in per element (tag, camera, simulation). An element
//! whose flag is on but whose data is missing is left out of the path, never
//! rendered as an empty segment or parameter.

pub mod camera;
pub mod config;
pub mod display;
pub mod generate;
pub mod naming;
pub mod output;
pub mod paths;
pub mod render;
pub mod resolve;
pub mod share;
pub mod simulation;
pub mod store;
pub mod tag;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
