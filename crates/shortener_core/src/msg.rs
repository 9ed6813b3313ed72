#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box; carries the full new text.
    InputChanged(String),
    /// User pressed the Shorten control.
    Submitted,
    /// The remote call for `request_id` settled.
    ShortenCompleted {
        request_id: crate::RequestId,
        outcome: ShortenOutcome,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// How a remote call settled, as far as the form cares.
///
/// Every transport, timeout and status failure collapses into `Failed`; the
/// details only go to the diagnostic log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    Shortened(String),
    Failed,
}
