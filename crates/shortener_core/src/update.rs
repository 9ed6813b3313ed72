use crate::{validate_input, Effect, FormState, FormStatus, Msg, ShortenOutcome, ERROR_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::Submitted => match validate_input(state.input()) {
            Ok(url) => {
                let request_id = state.begin_request();
                vec![Effect::Shorten { request_id, url }]
            }
            Err(hint) => {
                state.block_submission(hint);
                Vec::new()
            }
        },
        Msg::ShortenCompleted {
            request_id,
            outcome,
        } => {
            let status = match outcome {
                ShortenOutcome::Shortened(short_url) => FormStatus::Success(short_url),
                ShortenOutcome::Failed => FormStatus::Failed(ERROR_MESSAGE.to_string()),
            };
            // Latest issued request wins; late answers for older ones are dropped.
            state.complete_request(request_id, status);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
