//! Site configuration.
//!
//! A photo folio reads one optional `config.toml` from the content root, next
//! to the photo records. Every key has a default, so the file only lists what
//! differs:
//!
//! ```toml
//! [site]
//! title = "Night Walks"
//! base_url = "https://photos.example.com"
//!
//! [share]
//! camera = true
//! ```
//!
//! The user file is overlaid table by table onto the serialized defaults and
//! the result is deserialized with `deny_unknown_fields`, so a misspelled key
//! is an error rather than a silently ignored setting. `photo-folio
//! gen-config` prints every key with its default.

use crate::display::{DisplayOptions, ExifDisplayPolicy};
use crate::share::ShareFlags;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the content root.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Cannot serialize defaults: {0}")]
    Defaults(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Everything `config.toml` can set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub display: DisplayConfig,
    pub share: ShareConfig,
    pub theme: Theme,
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Load `config.toml` from the content root, or the defaults without one.
    pub fn load(content_root: &Path) -> Result<Self, ConfigError> {
        let path = content_root.join(CONFIG_FILE);
        if !path.exists() {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        Self::from_toml(&fs::read_to_string(&path)?)
    }

    /// Parse user TOML on top of the defaults and validate the result.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let user: toml::Table = toml::from_str(text)?;
        let mut merged = match toml::Value::try_from(Self::default())? {
            toml::Value::Table(table) => table,
            _ => return Err(ConfigError::Validation("defaults are not a table".into())),
        };
        overlay(&mut merged, user);
        let config: Self = toml::Value::Table(merged).try_into()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would produce broken pages.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        match url::Url::parse(&self.site.base_url) {
            Ok(url) if !url.cannot_be_a_base() => Ok(()),
            _ => Err(ConfigError::Validation(format!(
                "site.base_url must be an absolute URL, got {:?}",
                self.site.base_url
            ))),
        }
    }
}

/// Write `user` into `base`, descending into tables present on both sides.
fn overlay(base: &mut toml::Table, user: toml::Table) {
    for (key, value) in user {
        match value {
            toml::Value::Table(incoming) => match base.get_mut(&key) {
                Some(toml::Value::Table(existing)) => overlay(existing, incoming),
                _ => {
                    base.insert(key, toml::Value::Table(incoming));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}

/// `[site]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Shown in the document title and on the index page.
    pub title: String,
    /// Public origin, used to turn share paths into absolute URLs.
    pub base_url: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Photos".to_string(),
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

/// `[display]`: which side-panel groups may render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub show_camera: bool,
    pub show_simulation: bool,
    pub show_exif: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_camera: true,
            show_simulation: true,
            show_exif: true,
        }
    }
}

impl DisplayConfig {
    pub fn options(&self) -> DisplayOptions {
        DisplayOptions {
            show_camera: self.show_camera,
            show_simulation: self.show_simulation,
        }
    }

    pub fn policy(&self) -> ExifDisplayPolicy {
        ExifDisplayPolicy {
            show_exif_data: self.show_exif,
        }
    }
}

/// `[share]`: context embedded in share links unless a page asks for more.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShareConfig {
    pub tag: bool,
    pub camera: bool,
    pub simulation: bool,
}

impl ShareConfig {
    pub fn flags(&self) -> ShareFlags {
        ShareFlags {
            tag: self.tag,
            camera: self.camera,
            simulation: self.simulation,
        }
    }
}

/// `[theme.light]` and `[theme.dark]`, picked by `prefers-color-scheme`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub light: Palette,
    pub dark: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            light: Palette {
                background: "#fbfaf7".to_string(),
                text: "#1c1c1c".to_string(),
                muted: "#6b6b6b".to_string(),
                faint: "#a3a3a3".to_string(),
                link: "#1c1c1c".to_string(),
                link_hover: "#8a5a00".to_string(),
            },
            dark: Palette {
                background: "#101010".to_string(),
                text: "#e8e6e1".to_string(),
                muted: "#9a9a9a".to_string(),
                faint: "#5e5e5e".to_string(),
                link: "#e8e6e1".to_string(),
                link_hover: "#f0b44c".to_string(),
            },
        }
    }
}

impl Theme {
    /// CSS custom properties read by `static/style.css`.
    pub fn css(&self) -> String {
        let mut css = String::from(":root {\n");
        self.light.push_properties(&mut css, "    ");
        css.push_str("}\n\n@media (prefers-color-scheme: dark) {\n    :root {\n");
        self.dark.push_properties(&mut css, "        ");
        css.push_str("    }\n}\n");
        css
    }
}

/// One color scheme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub background: String,
    pub text: String,
    /// Captions, dates, tags, exposure list.
    pub muted: String,
    /// 35mm-equivalent annotation, share URL border.
    pub faint: String,
    pub link: String,
    pub link_hover: String,
}

impl Palette {
    fn properties(&self) -> [(&'static str, &str); 6] {
        [
            ("--bg", &self.background),
            ("--text", &self.text),
            ("--muted", &self.muted),
            ("--faint", &self.faint),
            ("--link", &self.link),
            ("--link-hover", &self.link_hover),
        ]
    }

    fn push_properties(&self, css: &mut String, indent: &str) {
        for (name, value) in self.properties() {
            css.push_str(&format!("{indent}{name}: {value};\n"));
        }
    }
}

/// `[processing]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Page-rendering workers; all cores when unset.
    pub max_processes: Option<usize>,
}

impl ProcessingConfig {
    /// Worker count: the configured value clamped to `1..=cores`.
    pub fn worker_count(&self) -> usize {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        self.max_processes.map_or(cores, |n| n.clamp(1, cores))
    }
}

/// Annotated `config.toml` listing every key at its default.
pub fn annotated_config() -> &'static str {
    r##"# photo-folio configuration
#
# Lives next to the photo records in the content directory. Every key is
# optional and shown at its default; delete what you don't change.
# Unknown keys are an error.

[site]
# Document titles and the index page.
title = "Photos"
# Origin the share view prefixes to photo paths.
base_url = "http://localhost:3000"

[display]
# Camera make and model under the caption.
show_camera = true
# Film simulation next to the camera. Hidden whenever the camera is.
show_simulation = true
# Focal length, aperture, shutter, ISO and compensation.
show_exif = true

[share]
# Context carried by share links. Tag pages always carry their tag.
# A photo lacking the value simply leaves it out.
tag = false
camera = false
simulation = false

[theme.light]
background = "#fbfaf7"
text = "#1c1c1c"
muted = "#6b6b6b"
faint = "#a3a3a3"
link = "#1c1c1c"
link_hover = "#8a5a00"

[theme.dark]
background = "#101010"
text = "#e8e6e1"
muted = "#9a9a9a"
faint = "#5e5e5e"
link = "#e8e6e1"
link_hover = "#f0b44c"

[processing]
# Parallel page renderers during `build`. Unset means one per core.
# max_processes = 4
"##
}
