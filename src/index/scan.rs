use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{LarderError, Result};

use super::{extract_metadata, ExtractOptions, IndexEntry, TEMPLATE_ID};

/// The recipe pages found in one pass over the recipes directory.
#[derive(Debug, Default)]
pub struct Scan {
    /// Live pages keyed by id (file stem). The template page is never listed.
    pub discovered: BTreeMap<String, IndexEntry>,
    /// Ids of every `.html` file present, live or not.
    pub present: BTreeSet<String>,
    /// Files that were present but not live.
    pub skipped: Vec<String>,
    /// Whether `recipe-template.html` exists.
    pub template_file: bool,
}

/// Read every `*.html` file directly inside `dir`.
pub fn scan_recipes(dir: &Path, opts: &ExtractOptions) -> Result<Scan> {
    if !dir.is_dir() {
        return Err(LarderError::RecipesDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut scan = Scan::default();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry
            .map_err(|e| LarderError::Other(format!("cannot read {}: {e}", dir.display())))?;
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|e| e.to_str()) != Some("html")
        {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            tracing::warn!("skipping non-UTF-8 file name {}", path.display());
            continue;
        };

        scan.present.insert(stem.to_string());
        if stem == TEMPLATE_ID {
            scan.template_file = true;
            continue;
        }

        let bytes = std::fs::read(path)?;
        let html = String::from_utf8_lossy(&bytes);
        match extract_metadata(&html, stem, opts) {
            Some(meta) => {
                tracing::debug!("live: {stem} ({})", meta.title);
                scan.discovered.insert(stem.to_string(), meta);
            }
            None => {
                tracing::debug!("not live, skipping: {stem}");
                scan.skipped.push(stem.to_string());
            }
        }
    }

    Ok(scan)
}
