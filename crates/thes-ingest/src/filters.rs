//! Filter discovery: one plain-text word list per file.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use thes_model::{ConfigurationError, Filter, FilterSet, Result};

/// Environment variable for overriding the filter directory.
pub const FILTER_DIR_ENV_VAR: &str = "THES_FILTER_DIR";

/// Directory used when neither a flag nor the environment names one.
pub const DEFAULT_FILTER_DIR: &str = "filters";

/// Resolves the filter directory.
///
/// Resolution order:
/// 1. `flag` (command line)
/// 2. `THES_FILTER_DIR` environment variable
/// 3. `configured` (settings file)
/// 4. `filters/` relative to the working directory
pub fn filter_dir(flag: Option<&Path>, configured: Option<&Path>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    if let Ok(dir) = std::env::var(FILTER_DIR_ENV_VAR) {
        return PathBuf::from(dir);
    }
    configured.map_or_else(|| PathBuf::from(DEFAULT_FILTER_DIR), Path::to_path_buf)
}

/// Lists all `.txt` files in a directory, sorted by file name.
pub fn list_filter_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ConfigurationError::FilterDirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(|e| ConfigurationError::io(dir, e))?;
    for entry_result in entries {
        let entry = entry_result.map_err(|e| ConfigurationError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_txt = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if is_txt {
            files.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-txt file in filter directory");
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Loads every word list in `dir`. The filter name is the file stem.
pub fn load_filter_dir(dir: &Path) -> Result<FilterSet> {
    let mut filters = Vec::new();
    for path in list_filter_files(dir)? {
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            warn!(path = %path.display(), "skipping filter file with non UTF-8 name");
            continue;
        };
        let bytes = std::fs::read(&path).map_err(|e| ConfigurationError::io(&path, e))?;
        let contents =
            String::from_utf8(bytes).map_err(|e| ConfigurationError::MalformedFilter {
                path: path.clone(),
                message: e.to_string(),
            })?;
        let filter = Filter::new(name, contents.lines());
        debug!(filter = name, words = filter.len(), "loaded filter");
        filters.push(filter);
    }
    FilterSet::new(filters)
}
