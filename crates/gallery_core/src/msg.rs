/// Page-change event as emitted by the grid's paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    /// Offset of the first record on the new page.
    pub first: u64,
    /// Rows per page.
    pub rows: u32,
    /// Zero-based page index.
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The shell finished its first layout and wants data.
    Mounted,
    /// User moved to another page.
    PageChanged(PageChange),
    /// Grid reported the new page-local selection.
    SelectionChanged(Vec<crate::RecordId>),
    /// User opened or closed the custom-select overlay.
    CustomSelectToggled,
    /// User dismissed the custom-select overlay.
    CustomSelectClosed,
    /// User edited the custom-select count input.
    CustomCountInput(String),
    /// User submitted the custom-select count.
    CustomSelectSubmitted,
    /// Engine delivered a page.
    PageLoaded {
        request_id: crate::RequestId,
        page: u32,
        records: Vec<crate::Record>,
        total_records: u64,
    },
    /// Engine failed to deliver a page.
    PageFailed {
        request_id: crate::RequestId,
        page: u32,
        message: String,
    },
}
