//! Film simulation presets.
//!
//! A film simulation is a named in-camera color/tone preset emulating a film
//! stock. Records carry the preset identifier (`classic-chrome`, `acros`, ...);
//! labels for the Fujifilm presets are looked up here and anything unknown
//! falls back to its identifier with dashes turned into spaces.

use crate::naming;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a film simulation preset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmSimulation(String);

/// Known Fujifilm presets: `(identifier, label)`.
const FUJIFILM_LABELS: &[(&str, &str)] = &[
    ("provia", "Provia"),
    ("velvia", "Velvia"),
    ("astia", "Astia"),
    ("classic-chrome", "Classic Chrome"),
    ("classic-negative", "Classic Negative"),
    ("eterna", "Eterna"),
    ("eterna-bleach-bypass", "Eterna Bleach Bypass"),
    ("pro-neg-hi", "Pro Neg. Hi"),
    ("pro-neg-std", "Pro Neg. Std"),
    ("nostalgic-neg", "Nostalgic Neg."),
    ("reala-ace", "Reala Ace"),
    ("acros", "Acros"),
    ("monochrome", "Monochrome"),
    ("sepia", "Sepia"),
];

impl FilmSimulation {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Slug used in paths and query strings.
    pub fn slug(&self) -> String {
        naming::slugify(&self.0)
    }

    /// Human-readable name of the preset.
    pub fn label(&self) -> String {
        let slug = self.slug();
        FUJIFILM_LABELS
            .iter()
            .find(|(id, _)| *id == slug)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| naming::label_from_slug(&slug))
    }
}

impl fmt::Display for FilmSimulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
