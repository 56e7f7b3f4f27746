use crate::error::VersionError;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Version reported when no usable manifest is found.
pub const FALLBACK_VERSION: &str = "dev";

/// File name of the manifest shipped next to the application.
pub const MANIFEST_FILE: &str = "version.json";

#[derive(Deserialize)]
struct Manifest {
    version: String,
}

/// # Application Version
///
/// Resolved once at start-up and shared read-only for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppVersion(String);

impl AppVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// Reads the manifest at `path`, falling back to [`FALLBACK_VERSION`] on
    /// any failure. The failure is logged and otherwise dropped.
    pub fn resolve(path: &Path) -> Self {
        match read_manifest(path) {
            Ok(version) => {
                tracing::debug!(path = %path.display(), %version, "resolved application version");
                Self(version)
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "using fallback version");
                Self(FALLBACK_VERSION.to_string())
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reads `{"version": "..."}` from `path`.
///
/// # Errors
/// - [`VersionError::Io`] if the file cannot be read
/// - [`VersionError::Json`] if it is not a manifest object
/// - [`VersionError::Empty`] if the version string is blank
pub fn read_manifest(path: &Path) -> Result<String, VersionError> {
    let raw = fs::read_to_string(path)?;
    let manifest: Manifest = serde_json::from_str(&raw)?;
    let version = manifest.version.trim();
    if version.is_empty() {
        return Err(VersionError::Empty);
    }
    Ok(version.to_string())
}

/// Picks the manifest location: an explicit override, else `version.json`
/// beside the executable, else `version.json` in the working directory.
pub fn manifest_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(MANIFEST_FILE)))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(MANIFEST_FILE))
}
