//! Batch files: many sensor packages read in one go.
//!
//! Two layouts are accepted, chosen by file extension:
//!
//! ```text
//! # packages.toml
//! [[package]]
//! workout = "SWM"
//! data = [720, 1, 80, 25, 40]
//! ```
//!
//! ```text
//! // packages.json
//! [{ "workout": "RUN", "data": [15000, 1, 75] }]
//! ```

use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Deserialize;
use tracing::debug;

use crate::package::Package;

/// Errors that can occur while loading a batch file.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid TOML in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct PackageFile {
    #[serde(default)]
    package: Vec<Package>,
}

/// Read every package listed in a batch file, in file order.
pub fn load_packages(path: &Path) -> Result<Vec<Package>, BatchError> {
    let contents = fs::read_to_string(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let packages = if is_json {
        serde_json::from_str(&contents).map_err(|source| BatchError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        let file: PackageFile = toml::from_str(&contents).map_err(|source| BatchError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        file.package
    };

    debug!(path = %path.display(), count = packages.len(), "loaded batch file");
    Ok(packages)
}
