//! Shortener core: pure form state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, ShortenOutcome};
pub use state::{validate_input, FormState, FormStatus, InputHint, RequestId, ERROR_MESSAGE};
pub use update::update;
pub use view_model::{FormViewModel, ResultView};
