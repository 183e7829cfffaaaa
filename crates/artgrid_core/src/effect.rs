use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one page. Any earlier request still in flight is superseded.
    FetchPage { request_id: RequestId, page: u32 },
}
