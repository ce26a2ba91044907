use std::collections::BTreeSet;

use crate::{Record, RecordId};

/// Cross-page set of selected record ids.
///
/// Lives for the whole session. Ids stay in the set after their page has been
/// replaced, so the set may reference records that are no longer in memory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    ids: BTreeSet<RecordId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.ids.iter().copied()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Make `page_selection` authoritative for exactly the ids in `page_ids`.
    ///
    /// Every id of the page is dropped, then the page-local selection is added
    /// back. Ids in `page_selection` that are not part of the page are ignored
    /// so a page-wide toggle can never touch another page.
    pub fn reconcile(&mut self, page_ids: &[RecordId], page_selection: &[RecordId]) {
        for id in page_ids {
            self.ids.remove(id);
        }
        self.ids.extend(
            page_selection
                .iter()
                .copied()
                .filter(|id| page_ids.contains(id)),
        );
    }

    /// Records of `page` whose id is in the set, in page order.
    pub fn selected_on_page<'a>(&self, page: &'a [Record]) -> Vec<&'a Record> {
        page.iter().filter(|record| self.contains(record.id)).collect()
    }
}

impl FromIterator<RecordId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = RecordId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Pending "select N rows" request that is satisfied page by page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoSelectQueue {
    remaining: u32,
}

impl AutoSelectQueue {
    pub fn new(target: u32) -> Self {
        Self { remaining: target }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_idle(&self) -> bool {
        self.remaining == 0
    }

    /// Select up to `remaining` unselected records of `page`, in page order.
    ///
    /// Returns the number of ids added to `selection`.
    pub fn advance(&mut self, page: &[Record], selection: &mut SelectionSet) -> usize {
        if self.is_idle() {
            return 0;
        }

        let mut added = 0u32;
        for record in page {
            if added == self.remaining {
                break;
            }
            if selection.ids.insert(record.id) {
                added += 1;
            }
        }

        self.remaining -= added;
        added as usize
    }
}
