//! Shortener engine: the outbound shortening call and its background worker.
mod client;
mod decode;
mod engine;
mod types;

pub use client::{ReqwestShortener, ShortenSettings, Shortener, DEFAULT_ENDPOINT};
pub use decode::{decode_body, DecodeError};
pub use engine::EngineHandle;
pub use types::{
    EngineError, EngineEvent, FailureKind, RequestId, ShortenError, ShortenParams, ShortenPayload,
};
