use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::output::CommandOutput;

use super::{IndexEntry, Scan, TEMPLATE_ID};

/// A field whose value differs between the previous and the new entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldChange {
    pub field: &'static str,
    pub old: serde_json::Value,
    pub new: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdatedEntry {
    pub id: String,
    pub changes: Vec<FieldChange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemovalReason {
    /// No `<id>.html` in the recipes directory any more.
    FileMissing,
    /// The page exists but is not marked live.
    NotLive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Removal {
    pub id: String,
    pub reason: RemovalReason,
}

/// What a reconciliation changed, per recipe id.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReconcileReport {
    pub new: Vec<String>,
    pub updated: Vec<UpdatedEntry>,
    pub unchanged: Vec<String>,
    pub removed: Vec<Removal>,
    /// Pages on disk that were skipped because they are not live.
    pub skipped: Vec<String>,
    pub total_live: usize,
    pub template_kept: bool,
}

impl CommandOutput for ReconcileReport {
    fn human_display(&self) -> String {
        let mut out = format!(
            "Summary:\n\
             - New recipes: {}\n\
             - Updated recipes: {}\n\
             - Unchanged recipes: {}\n\
             - Removed recipes: {}\n\
             - Total live recipes: {}",
            self.new.len(),
            self.updated.len(),
            self.unchanged.len(),
            self.removed.len(),
            self.total_live,
        );
        if !self.removed.is_empty() {
            out.push_str("\n\nRemoved the following recipes from the index:");
            for removal in &self.removed {
                out.push_str(&format!("\n- {}", removal.id));
            }
        }
        out
    }
}

pub struct MergeOutcome {
    pub index: Vec<IndexEntry>,
    pub report: ReconcileReport,
}

/// Merge freshly scanned pages into the previous index.
///
/// Discovered entries replace their previous versions and come out sorted by
/// title (then id). Previous entries with no live page are dropped. The
/// template entry is kept, hidden, and placed last.
pub fn merge(previous: Vec<IndexEntry>, scan: Scan) -> MergeOutcome {
    let mut previous_order: Vec<String> = Vec::new();
    let mut previous_by_id: HashMap<String, IndexEntry> = HashMap::new();
    for entry in previous {
        if !previous_by_id.contains_key(&entry.id) {
            previous_order.push(entry.id.clone());
        }
        previous_by_id.insert(entry.id.clone(), entry);
    }

    let mut template = previous_by_id.get(TEMPLATE_ID).cloned().map(|mut t| {
        t.display = false;
        t
    });
    if template.is_none() && scan.template_file {
        template = Some(IndexEntry::template());
    }

    let mut report = ReconcileReport {
        skipped: scan.skipped,
        template_kept: template.is_some(),
        ..Default::default()
    };

    let discovered_ids: HashSet<&str> = scan.discovered.keys().map(String::as_str).collect();

    for id in &previous_order {
        if id == TEMPLATE_ID || discovered_ids.contains(id.as_str()) {
            continue;
        }
        let reason = if scan.present.contains(id) {
            RemovalReason::NotLive
        } else {
            RemovalReason::FileMissing
        };
        report.removed.push(Removal {
            id: id.clone(),
            reason,
        });
    }

    let mut index: Vec<IndexEntry> = Vec::with_capacity(scan.discovered.len() + 1);
    for (id, entry) in scan.discovered {
        match previous_by_id.get(&id) {
            None => report.new.push(id),
            Some(old) => {
                let changes = diff(old, &entry);
                if changes.is_empty() {
                    report.unchanged.push(id);
                } else {
                    report.updated.push(UpdatedEntry { id, changes });
                }
            }
        }
        index.push(entry);
    }

    index.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
    report.total_live = index.len();

    if let Some(template) = template {
        index.push(template);
    }

    MergeOutcome { index, report }
}

/// Field-by-field comparison of two entries for the same id.
pub fn diff(old: &IndexEntry, new: &IndexEntry) -> Vec<FieldChange> {
    let mut changes = Vec::new();
    macro_rules! compare {
        ($($field:ident),*) => {
            $(
                if old.$field != new.$field {
                    changes.push(FieldChange {
                        field: stringify!($field),
                        old: serde_json::json!(old.$field),
                        new: serde_json::json!(new.$field),
                    });
                }
            )*
        };
    }
    compare!(title, description, difficulty, time, servings, categories, display);
    changes
}
