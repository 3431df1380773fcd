//! Share link composition.
//!
//! A share link always points at one photo. The caller opts into each piece
//! of context (tag, camera, film simulation) separately; a piece is embedded
//! only when its flag is set *and* the photo actually has the value. A set
//! flag with nothing behind it is silently dropped.

use crate::camera::{Camera, camera_from_photo};
use crate::paths;
use crate::simulation::FilmSimulation;
use crate::types::Photo;

/// Which context the caller wants embedded in a share link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShareFlags {
    pub tag: bool,
    pub camera: bool,
    pub simulation: bool,
}

impl ShareFlags {
    /// Combine with another set of flags; a flag set in either is set.
    pub fn or(self, other: ShareFlags) -> ShareFlags {
        ShareFlags {
            tag: self.tag || other.tag,
            camera: self.camera || other.camera,
            simulation: self.simulation || other.simulation,
        }
    }
}

/// Context actually embedded in a share link. Recomputed per render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareContext {
    pub tag: Option<String>,
    pub camera: Option<Camera>,
    pub simulation: Option<FilmSimulation>,
}

/// Gate each context element on its flag and on the photo's data.
pub fn share_context(photo: &Photo, primary_tag: Option<&str>, flags: ShareFlags) -> ShareContext {
    ShareContext {
        tag: primary_tag
            .filter(|_| flags.tag)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from),
        camera: if flags.camera {
            camera_from_photo(photo)
        } else {
            None
        },
        simulation: photo
            .film_simulation()
            .filter(|_| flags.simulation)
            .cloned(),
    }
}

/// Build the share path for `photo` with the opted-in context.
pub fn build_share_path(photo: &Photo, primary_tag: Option<&str>, flags: ShareFlags) -> String {
    let context = share_context(photo, primary_tag, flags);
    paths::path_for_photo_share(
        photo,
        context.tag.as_deref(),
        context.camera.as_ref(),
        context.simulation.as_ref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{bare_photo, photo};

    const ALL: ShareFlags = ShareFlags {
        tag: true,
        camera: true,
        simulation: true,
    };

    fn every_flag_combination() -> Vec<ShareFlags> {
        let mut combos = Vec::new();
        for tag in [false, true] {
            for camera in [false, true] {
                for simulation in [false, true] {
                    combos.push(ShareFlags {
                        tag,
                        camera,
                        simulation,
                    });
                }
            }
        }
        combos
    }

    #[test]
    fn no_flags_no_context() {
        let path = build_share_path(&photo("abc"), Some("street"), ShareFlags::default());
        assert_eq!(path, "/p/abc/share");
    }

    #[test]
    fn all_flags_full_context() {
        let path = build_share_path(&photo("abc"), Some("street"), ALL);
        assert_eq!(
            path,
            "/tag/street/abc/share?camera=fujifilm-x100v&simulation=classic-chrome"
        );
    }

    #[test]
    fn context_present_exactly_for_set_flags_with_data() {
        let p = photo("abc");
        for flags in every_flag_combination() {
            let path = build_share_path(&p, Some("street"), flags);
            assert_eq!(path.contains("/tag/street/"), flags.tag, "{flags:?}");
            assert_eq!(path.contains("camera="), flags.camera, "{flags:?}");
            assert_eq!(path.contains("simulation="), flags.simulation, "{flags:?}");
        }
    }

    #[test]
    fn non_ascii_context_is_kept() {
        let mut p = photo("abc");
        p.make = Some("日本".to_string());
        p.model = None;
        let tag_only = ShareFlags {
            tag: true,
            camera: false,
            simulation: false,
        };
        assert_eq!(
            build_share_path(&p, Some("東京"), tag_only),
            "/tag/%E6%9D%B1%E4%BA%AC/abc/share"
        );
        for flags in every_flag_combination() {
            let path = build_share_path(&p, Some("Ελλάδα"), flags);
            assert_eq!(path.starts_with("/tag/"), flags.tag, "{flags:?}");
            assert_eq!(path.contains("camera="), flags.camera, "{flags:?}");
        }
    }

    #[test]
    fn missing_simulation_is_omitted_not_an_error() {
        let mut p = photo("abc");
        p.tags = vec!["street".to_string()];
        p.film_simulation = None;
        let path = build_share_path(&p, Some("street"), ALL);
        assert_eq!(path, "/tag/street/abc/share?camera=fujifilm-x100v");
    }

    #[test]
    fn missing_camera_is_omitted() {
        let ctx = share_context(&bare_photo("abc"), None, ALL);
        assert_eq!(ctx, ShareContext::default());
        assert_eq!(build_share_path(&bare_photo("abc"), None, ALL), "/p/abc/share");
    }

    #[test]
    fn tag_flag_without_primary_tag_is_omitted() {
        let ctx = share_context(&photo("abc"), None, ALL);
        assert_eq!(ctx.tag, None);
        let ctx = share_context(&photo("abc"), Some("  "), ALL);
        assert_eq!(ctx.tag, None);
    }

    #[test]
    fn unset_flag_excludes_available_data() {
        let ctx = share_context(
            &photo("abc"),
            Some("street"),
            ShareFlags {
                tag: false,
                camera: true,
                simulation: false,
            },
        );
        assert_eq!(ctx.tag, None);
        assert!(ctx.camera.is_some());
        assert_eq!(ctx.simulation, None);
    }

    #[test]
    fn composition_is_deterministic() {
        let p = photo("abc");
        for flags in every_flag_combination() {
            assert_eq!(
                build_share_path(&p, Some("street"), flags),
                build_share_path(&p, Some("street"), flags)
            );
        }
    }

    #[test]
    fn flags_or_combines() {
        let config = ShareFlags {
            tag: true,
            camera: false,
            simulation: false,
        };
        let cli = ShareFlags {
            tag: false,
            camera: true,
            simulation: false,
        };
        assert_eq!(
            config.or(cli),
            ShareFlags {
                tag: true,
                camera: true,
                simulation: false,
            }
        );
    }
}
