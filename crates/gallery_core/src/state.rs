use crate::view_model::{AppViewModel, CustomSelectView, RowView};
use crate::{AutoSelectQueue, Effect, Record, RecordId, RequestId, SelectionSet};

/// Rows per catalog page; matches the API's default page length.
pub const PAGE_SIZE: u32 = 12;

/// Paginator position as understood by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    /// Offset of the first record on the page.
    pub first: u64,
    /// Rows per page.
    pub rows: u32,
    /// One-based page number sent to the catalog API.
    pub page: u32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            first: 0,
            rows: PAGE_SIZE,
            page: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    cursor: PageCursor,
    records: Vec<Record>,
    total_records: u64,
    in_flight: usize,
    error: Option<String>,
    selection: SelectionSet,
    auto_select: AutoSelectQueue,
    custom_input: String,
    overlay_open: bool,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let rows = self
            .records
            .iter()
            .map(|record| RowView {
                record: record.clone(),
                selected: self.selection.contains(record.id),
            })
            .collect();
        let custom_count = self.custom_count();

        AppViewModel {
            cursor: self.cursor,
            rows,
            total_records: self.total_records,
            total_pages: total_pages(self.total_records, self.cursor.rows),
            loading: self.is_loading(),
            error: self.error.clone(),
            selected_count: self.selection.len(),
            pending_auto_select: self.auto_select.remaining(),
            custom_select: CustomSelectView {
                open: self.overlay_open,
                input: self.custom_input.clone(),
                can_submit: custom_count.is_some_and(|count| count > 0),
            },
            dirty: self.dirty,
        }
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn pending_auto_select(&self) -> u32 {
        self.auto_select.remaining()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Returns whether a render is needed and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub(crate) fn custom_count(&self) -> Option<u32> {
        self.custom_input.parse().ok()
    }

    pub(crate) fn begin_fetch(&mut self, page: u32) -> Effect {
        self.next_request_id += 1;
        self.in_flight += 1;
        self.error = None;
        self.dirty = true;
        Effect::FetchPage {
            request_id: self.next_request_id,
            page,
        }
    }

    /// Moves the cursor and reports whether the page number changed.
    pub(crate) fn move_cursor(&mut self, cursor: PageCursor) -> bool {
        let changed = self.cursor.page != cursor.page;
        self.cursor = cursor;
        self.dirty = true;
        changed
    }

    pub(crate) fn apply_page(&mut self, records: Vec<Record>, total_records: u64) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.records = records;
        self.total_records = total_records;
        self.error = None;
        self.auto_select.advance(&self.records, &mut self.selection);
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.error = Some(message);
        self.dirty = true;
    }

    pub(crate) fn apply_page_selection(&mut self, page_selection: &[RecordId]) {
        let page_ids: Vec<RecordId> = self.records.iter().map(|record| record.id).collect();
        self.selection.reconcile(&page_ids, page_selection);
        self.dirty = true;
    }

    pub(crate) fn start_auto_select(&mut self, target: u32) {
        // A new target replaces the previous selection instead of adding to it.
        self.selection.clear();
        self.auto_select = AutoSelectQueue::new(target);
        self.auto_select.advance(&self.records, &mut self.selection);
        self.overlay_open = false;
        self.dirty = true;
    }

    pub(crate) fn set_custom_input(&mut self, raw: &str) {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits != self.custom_input {
            self.custom_input = digits;
            self.dirty = true;
        }
    }

    pub(crate) fn set_overlay_open(&mut self, open: bool) {
        if self.overlay_open != open {
            self.overlay_open = open;
            self.dirty = true;
        }
    }

    pub(crate) fn overlay_open(&self) -> bool {
        self.overlay_open
    }
}

fn total_pages(total_records: u64, rows: u32) -> u64 {
    if rows == 0 {
        return 0;
    }
    total_records.div_ceil(u64::from(rows))
}
