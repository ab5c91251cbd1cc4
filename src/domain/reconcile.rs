// src/domain/reconcile.rs
//
// Merge-by-id of normalized patches into the catalog. Pure: takes the
// current catalog, returns a new one plus counters for the summary line.

use crate::domain::home::Home;
use crate::domain::normalize::HomePatch;
use std::fmt;

/// Counters for the human-readable import summary.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MergeSummary {
    pub added: usize,
    pub updated: usize,
    pub skipped: usize,
}

impl fmt::Display for MergeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "added {}, updated {}, skipped {}",
            self.added, self.updated, self.skipped
        )
    }
}

/// Merges a sequence of normalization outcomes into the catalog. A `None`
/// is a record that failed validation and counts as skipped; a patch whose
/// id already exists updates that record in place (shallow merge); a new id
/// appends, preserving insertion order.
pub fn merge(
    homes: &[Home],
    patches: impl IntoIterator<Item = Option<HomePatch>>,
) -> (Vec<Home>, MergeSummary) {
    let mut next = homes.to_vec();
    let mut summary = MergeSummary::default();

    for patch in patches {
        let Some(patch) = patch else {
            summary.skipped += 1;
            continue;
        };
        match next.iter_mut().find(|h| h.id == patch.id) {
            Some(existing) => {
                patch.apply_to(existing);
                summary.updated += 1;
            }
            None => {
                next.push(patch.into_home());
                summary.added += 1;
            }
        }
    }

    (next, summary)
}
