//! The JSON index of published recipes and its reconciliation against the
//! rendered pages on disk.

pub mod extract;
pub mod merge;
pub mod scan;

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ResolvedPaths;
use crate::error::{LarderError, Result};

pub use extract::{extract_metadata, ExtractOptions};
pub use merge::{merge, MergeOutcome, ReconcileReport};
pub use scan::{scan_recipes, Scan};

/// Id of the sentinel entry that is always hidden and never removed.
pub const TEMPLATE_ID: &str = "recipe-template";

/// One published recipe as listed in `recipes.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default = "default_display")]
    pub display: bool,
}

fn default_display() -> bool {
    true
}

impl IndexEntry {
    /// The hidden entry synthesized when a template page exists but the
    /// index does not list it yet.
    pub fn template() -> Self {
        Self {
            id: TEMPLATE_ID.to_string(),
            title: "Recipe Template".into(),
            description: "Template for creating new recipes.".into(),
            difficulty: "easy".into(),
            time: "0 mins".into(),
            servings: 0,
            categories: Vec::new(),
            display: false,
        }
    }

    pub fn is_template(&self) -> bool {
        self.id == TEMPLATE_ID
    }
}

/// Load the index, treating a missing or malformed file as empty.
///
/// Only I/O failures other than "not found" are errors.
pub fn load_index(path: &Path) -> Result<Vec<IndexEntry>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no index at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    match serde_json::from_str(&contents) {
        Ok(entries) => Ok(entries),
        Err(e) => {
            tracing::warn!("ignoring malformed index {}: {e}", path.display());
            Ok(Vec::new())
        }
    }
}

/// Write the index as pretty-printed JSON.
///
/// The data goes to a temporary file next to `path` which is then renamed
/// over it, so an interrupted write leaves the old index in place.
pub fn save_index(path: &Path, entries: &[IndexEntry]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut json = serde_json::to_string_pretty(entries).map_err(|e| LarderError::Index {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    json.push('\n');

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(json.as_bytes())?;
    tmp.persist(path).map_err(|e| LarderError::Index {
        path: path.to_path_buf(),
        message: e.error.to_string(),
    })?;
    Ok(())
}

pub struct SyncOptions {
    pub dry_run: bool,
}

/// Reconcile the index file with the recipe pages: load, scan, merge and
/// (unless dry-running) write.
pub fn sync_index(
    paths: &ResolvedPaths,
    extract: &ExtractOptions,
    opts: &SyncOptions,
) -> Result<MergeOutcome> {
    let previous = load_index(&paths.index)?;
    tracing::debug!("loaded {} existing index entries", previous.len());

    let scan = scan_recipes(&paths.recipes, extract)?;
    tracing::debug!(
        "found {} live recipe pages in {}",
        scan.discovered.len(),
        paths.recipes.display()
    );

    let outcome = merge(previous, scan);

    if opts.dry_run {
        tracing::debug!("dry run, not writing {}", paths.index.display());
    } else {
        save_index(&paths.index, &outcome.index)?;
    }
    Ok(outcome)
}
