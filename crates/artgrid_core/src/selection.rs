//! Identity-keyed row selection and the bulk "select first N" action.
use std::collections::BTreeMap;

use crate::{Artwork, ArtworkId};

/// Set of selected records keyed by id.
///
/// Membership is independent of the page on display, so rows picked on an
/// earlier page stay selected after navigating away.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    records: BTreeMap<ArtworkId, Artwork>,
}

impl Selection {
    pub fn contains(&self, id: ArtworkId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> Vec<ArtworkId> {
        self.records.keys().copied().collect()
    }

    pub fn records(&self) -> impl Iterator<Item = &Artwork> {
        self.records.values()
    }
}

impl FromIterator<Artwork> for Selection {
    fn from_iter<I: IntoIterator<Item = Artwork>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().map(|record| (record.id, record)).collect(),
        }
    }
}

/// Number of rows a bulk select takes from a page of `available` rows.
pub fn effective_count(pending: i64, available: usize) -> usize {
    if pending <= 0 {
        return 0;
    }
    usize::try_from(pending).map_or(available, |n| n.min(available))
}

/// Holds the current selection and the count staged for the next bulk select.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionController {
    selection: Selection,
    pending_count: i64,
    pending_input: String,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn pending_count(&self) -> i64 {
        self.pending_count
    }

    /// Raw text last typed into the count input.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Stage a count. Any value is accepted; clamping happens on confirm.
    pub fn set_pending_count(&mut self, count: i64) {
        self.pending_count = count;
        self.pending_input = count.to_string();
    }

    /// Stage a count from free text. Anything that is not an integer counts as 0.
    pub fn set_pending_count_input(&mut self, raw: &str) {
        self.pending_count = raw.trim().parse().unwrap_or(0);
        self.pending_input = raw.to_string();
    }

    /// Replace the whole selection with the first `pending_count` rows of `page`.
    pub fn confirm_bulk_select(&mut self, page: &[Artwork]) {
        let take = effective_count(self.pending_count, page.len());
        self.selection = page[..take].iter().cloned().collect();
    }

    /// Add the record if absent, remove it if present.
    pub fn toggle_row(&mut self, record: &Artwork) {
        if self.selection.records.remove(&record.id).is_none() {
            self.selection.records.insert(record.id, record.clone());
        }
    }

    pub fn set_selection(&mut self, records: Vec<Artwork>) {
        self.selection = records.into_iter().collect();
    }

    /// Header-checkbox behaviour: deselect the page when it is fully selected,
    /// otherwise add its missing rows. Rows from other pages are kept.
    pub fn toggle_page(&mut self, page: &[Artwork]) {
        let all_selected = !page.is_empty() && page.iter().all(|r| self.selection.contains(r.id));
        let next: Vec<Artwork> = if all_selected {
            self.selection
                .records()
                .filter(|kept| page.iter().all(|r| r.id != kept.id))
                .cloned()
                .collect()
        } else {
            self.selection
                .records()
                .cloned()
                .chain(page.iter().filter(|r| !self.selection.contains(r.id)).cloned())
                .collect()
        };
        self.set_selection(next);
    }

    pub fn clear(&mut self) {
        self.set_selection(Vec::new());
    }
}
