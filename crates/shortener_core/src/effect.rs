use crate::RequestId;

/// IO requested by [`crate::update`]; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `url` to the remote shortening endpoint exactly once.
    Shorten { request_id: RequestId, url: String },
}
