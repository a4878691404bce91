//! Conversation session control.
//!
//! A `SessionController` owns the transcript, the draft input and the
//! single in-flight request slot. Presentation layers read snapshots and
//! subscribe to change events; they never mutate session state directly.

mod chat;
mod manager;
mod types;


pub use manager::SessionController;
pub use types::{
    SessionEvent, SessionPhase, SessionSettings, SessionSnapshot, SubmitOutcome,
    EMPTY_REPLY_NOTICE, FALLBACK_NOTICE, GREETING,
};
