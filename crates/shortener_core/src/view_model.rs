use crate::InputHint;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormViewModel {
    pub input: String,
    pub input_hint: Option<InputHint>,
    /// A request is in flight; the submit control stays enabled.
    pub pending: bool,
    pub result: Option<ResultView>,
    pub dirty: bool,
}

/// What the result area shows after a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    /// The shortened URL, rendered as a link to itself.
    Link { text: String, href: String },
    Message(String),
}
