use std::path::{Path, PathBuf};

/// A static image loaded by reference from the assets directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaRef {
    pub path: &'static str,
    pub alt: &'static str,
}

/// Outcome of looking a media reference up on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaStatus {
    Available(PathBuf),
    /// Rendered as a broken-image placeholder
    Missing,
}

impl MediaRef {
    pub const fn new(path: &'static str, alt: &'static str) -> Self {
        Self { path, alt }
    }

    pub fn file_name(&self) -> &'static str {
        self.path.rsplit('/').next().unwrap_or(self.path)
    }

    pub fn resolve(&self, assets_dir: &Path) -> MediaStatus {
        let full = assets_dir.join(self.path.trim_start_matches('/'));
        if full.is_file() {
            MediaStatus::Available(full)
        } else {
            MediaStatus::Missing
        }
    }
}

impl MediaStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, MediaStatus::Available(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_degrades() {
        let media = MediaRef::new("/images/none.png", "Nothing");
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(media.resolve(dir.path()), MediaStatus::Missing);
    }

    #[test]
    fn test_present_file_resolves() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images/poster.png"), b"png").unwrap();

        let media = MediaRef::new("/images/poster.png", "Poster");
        let status = media.resolve(dir.path());
        assert!(status.is_available());
        assert_eq!(
            status,
            MediaStatus::Available(dir.path().join("images/poster.png"))
        );
    }

    #[test]
    fn test_file_name() {
        let media = MediaRef::new("/images/poster-bersatu.png", "Bersatu");
        assert_eq!(media.file_name(), "poster-bersatu.png");
    }
}
