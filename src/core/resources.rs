//=========================================================================
// Resource Locator
//=========================================================================
//
// Resolves logical resource names to files and loads them into memory.
//
// Naming:
// ```text
//   media_path("drumloop.wav")  → "ms-appx:///media/drumloop.wav"
//   load_file(<logical name>)   → <install_dir>/media/drumloop.wav
//   write_path("record.wav")    → <temp_dir>/record.wav
// ```
//
// Media is addressed through the package scheme so examples never see the
// install location. Write paths are real filesystem paths.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fs;
use std::path::{Path, PathBuf};

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::HarnessError;

//=== Constants ===========================================================

/// Scheme prefix of logical (packaged) resource names.
pub const PACKAGE_SCHEME: &str = "ms-appx://";

//=== ResourceLocator =====================================================

#[derive(Debug, Clone)]
pub struct ResourceLocator {
    install_dir: PathBuf,
    temp_dir: PathBuf,
}

impl ResourceLocator {
    pub fn new(install_dir: impl Into<PathBuf>, temp_dir: impl Into<PathBuf>) -> Self {
        Self {
            install_dir: install_dir.into(),
            temp_dir: temp_dir.into(),
        }
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    /// Logical name of a packaged media file.
    pub fn media_path(&self, file_name: &str) -> String {
        format!("{}/media/{}", PACKAGE_SCHEME, file_name)
    }

    /// Writable location for an output file.
    pub fn write_path(&self, file_name: &str) -> PathBuf {
        self.temp_dir.join(file_name)
    }

    /// Maps a logical name onto the install directory.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, HarnessError> {
        let relative = name
            .strip_prefix(PACKAGE_SCHEME)
            .ok_or_else(|| HarnessError::resource(name, format!("expected {} prefix", PACKAGE_SCHEME)))?
            .trim_start_matches('/');

        Ok(self.install_dir.join(relative))
    }

    /// Reads a whole packaged file.
    pub fn load_file(&self, name: &str) -> Result<Vec<u8>, HarnessError> {
        let path = self.resolve(name)?;
        let bytes = fs::read(&path).map_err(|e| HarnessError::resource(name, e))?;

        debug!(target: "harness", "Loaded {} ({} bytes)", path.display(), bytes.len());
        Ok(bytes)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn media_path_uses_package_scheme() {
        let locator = ResourceLocator::new("/app", "/tmp");
        assert_eq!(locator.media_path("drumloop.wav"), "ms-appx:///media/drumloop.wav");
    }

    #[test]
    fn write_path_is_under_temp_dir() {
        let locator = ResourceLocator::new("/app", "/var/tmp/harness");
        assert_eq!(
            locator.write_path("record.wav"),
            Path::new("/var/tmp/harness").join("record.wav")
        );
    }

    #[test]
    fn resolve_strips_scheme_and_leading_slashes() {
        let locator = ResourceLocator::new("/app", "/tmp");
        let path = locator.resolve("ms-appx:///media/a.ogg").unwrap();
        assert_eq!(path, Path::new("/app").join("media/a.ogg"));
    }

    #[test]
    fn load_file_reads_whole_file() {
        let install = tempdir().unwrap();
        fs::create_dir(install.path().join("media")).unwrap();
        fs::write(install.path().join("media").join("wave.raw"), [1u8, 2, 3, 4]).unwrap();

        let locator = ResourceLocator::new(install.path(), std::env::temp_dir());
        let name = locator.media_path("wave.raw");

        assert_eq!(locator.load_file(&name).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn missing_file_is_resource_unavailable() {
        let install = tempdir().unwrap();
        let locator = ResourceLocator::new(install.path(), std::env::temp_dir());

        let err = locator.load_file(&locator.media_path("missing.wav")).unwrap_err();
        match err {
            HarnessError::ResourceUnavailable { name, .. } => {
                assert_eq!(name, "ms-appx:///media/missing.wav")
            }
            other => panic!("Expected ResourceUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn missing_scheme_is_resource_unavailable() {
        let install = tempdir().unwrap();
        fs::write(install.path().join("plain.bin"), b"data").unwrap();
        let locator = ResourceLocator::new(install.path(), std::env::temp_dir());

        let err = locator.load_file("plain.bin").unwrap_err();
        assert!(matches!(err, HarnessError::ResourceUnavailable { .. }));
    }
}
