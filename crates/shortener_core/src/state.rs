use url::Url;

use crate::view_model::{FormViewModel, ResultView};

pub type RequestId = u64;

/// Text shown in the result area whenever a submission fails.
pub const ERROR_MESSAGE: &str = "Error creating short URL";

/// Outcome of the most recent submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Pending {
        request_id: RequestId,
    },
    Success(String),
    Failed(String),
}

/// Why a submission was blocked before any request went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputHint {
    Empty,
    NotAUrl,
}

impl InputHint {
    pub fn message(self) -> &'static str {
        match self {
            InputHint::Empty => "Please fill out this field.",
            InputHint::NotAUrl => "Please enter a URL.",
        }
    }
}

/// Check the input against the required and URL-format constraints.
///
/// Returns the trimmed text that should be sent. The text is not normalized:
/// `https://example.com` is sent as typed, not as `https://example.com/`.
pub fn validate_input(raw: &str) -> Result<String, InputHint> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputHint::Empty);
    }
    Url::parse(trimmed).map_err(|_| InputHint::NotAUrl)?;
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    input: String,
    status: FormStatus,
    input_hint: Option<InputHint>,
    /// Id of the latest issued request; 0 until the first submission.
    latest_request: RequestId,
    dirty: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn input_hint(&self) -> Option<InputHint> {
        self.input_hint
    }

    pub fn view(&self) -> FormViewModel {
        let result = match &self.status {
            FormStatus::Idle | FormStatus::Pending { .. } => None,
            // An empty body leaves the result area hidden, as if nothing came back.
            FormStatus::Success(short_url) if short_url.is_empty() => None,
            FormStatus::Success(short_url) => Some(ResultView::Link {
                text: short_url.clone(),
                href: short_url.clone(),
            }),
            FormStatus::Failed(message) => Some(ResultView::Message(message.clone())),
        };

        FormViewModel {
            input: self.input.clone(),
            input_hint: self.input_hint,
            pending: matches!(self.status, FormStatus::Pending { .. }),
            result,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text || self.input_hint.is_some() {
            self.dirty = true;
        }
        self.input = text;
        self.input_hint = None;
    }

    pub(crate) fn block_submission(&mut self, hint: InputHint) {
        if self.input_hint != Some(hint) {
            self.dirty = true;
        }
        self.input_hint = Some(hint);
    }

    /// Moves to `Pending` under a fresh request id, superseding any request in flight.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.latest_request += 1;
        self.status = FormStatus::Pending {
            request_id: self.latest_request,
        };
        self.input_hint = None;
        self.dirty = true;
        self.latest_request
    }

    /// Applies a completion unless it belongs to a superseded request.
    pub(crate) fn complete_request(&mut self, request_id: RequestId, status: FormStatus) {
        if request_id != self.latest_request {
            return;
        }
        self.status = status;
        self.dirty = true;
    }
}
