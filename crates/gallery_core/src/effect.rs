#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one catalog page. Outstanding fetches are never cancelled.
    FetchPage {
        request_id: crate::RequestId,
        page: u32,
    },
}
