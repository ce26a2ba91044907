use crate::{ColumnField, PageCursor, Record, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomSelectView {
    pub open: bool,
    pub input: String,
    pub can_submit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub cursor: PageCursor,
    pub rows: Vec<RowView>,
    pub total_records: u64,
    pub total_pages: u64,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_count: usize,
    pub pending_auto_select: u32,
    pub custom_select: CustomSelectView,
    pub dirty: bool,
}

impl AppViewModel {
    /// Ids of the current page's rows that the grid should show as checked.
    pub fn page_selection(&self) -> Vec<RecordId> {
        self.rows
            .iter()
            .filter(|row| row.selected)
            .map(|row| row.record.id)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub record: Record,
    pub selected: bool,
}

/// Column definition handed to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub field: ColumnField,
    pub header: &'static str,
    pub sortable: bool,
}

pub const COLUMNS: [ColumnDef; 6] = [
    ColumnDef {
        field: ColumnField::Title,
        header: "Title",
        sortable: true,
    },
    ColumnDef {
        field: ColumnField::PlaceOfOrigin,
        header: "Place of Origin",
        sortable: true,
    },
    ColumnDef {
        field: ColumnField::ArtistDisplay,
        header: "Artist",
        sortable: true,
    },
    ColumnDef {
        field: ColumnField::Inscriptions,
        header: "Inscriptions",
        sortable: false,
    },
    ColumnDef {
        field: ColumnField::DateStart,
        header: "Start Date",
        sortable: true,
    },
    ColumnDef {
        field: ColumnField::DateEnd,
        header: "End Date",
        sortable: true,
    },
];
