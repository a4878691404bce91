//! Session types and the single-request guard.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::prompt::DEFAULT_PERSONA;
use crate::{CompletionError, Message};

/// Seed message shown when a session starts.
pub const GREETING: &str = "Initialize Protocol: 2026. Waiting for input...";

/// Shown in place of a reply when the request fails for any reason.
pub const FALLBACK_NOTICE: &str = "Connection severed. Check API uplinks.";

/// Shown when the model answers with no text.
pub const EMPTY_REPLY_NOTICE: &str = "Data stream empty.";

/// Fixed texts used by a session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Preamble for every outbound prompt. `None` makes every turn fail
    /// with a configuration error (surfaced as the fallback notice).
    pub persona: Option<String>,
    pub greeting: String,
    pub fallback_notice: String,
    pub empty_reply_notice: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            persona: Some(DEFAULT_PERSONA.to_string()),
            greeting: GREETING.to_string(),
            fallback_notice: FALLBACK_NOTICE.to_string(),
            empty_reply_notice: EMPTY_REPLY_NOTICE.to_string(),
        }
    }
}

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    AwaitingReply,
}

/// Change notification for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A message was appended; `len` is the log length afterwards.
    MessageAppended { message: Message, len: usize },
    /// The "working" indicator should be shown (`true`) or hidden.
    PendingChanged(bool),
}

/// Point-in-time copy of everything a renderer needs.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub messages: Vec<Message>,
    pub pending: bool,
    pub draft: String,
}

/// Result of a submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Draft was empty or whitespace-only; nothing happened.
    Empty,
    /// A request was already in flight; the submission was dropped.
    Busy,
    /// The turn completed with a model reply (possibly the empty-reply notice).
    Replied,
    /// The turn completed with the fallback notice.
    Failed(CompletionError),
}

/// Holds the in-flight slot and clears it on drop, so an early return or a
/// dropped future cannot leave the session stuck in `AwaitingReply`.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Claim the slot. Returns `None` if a request is already pending.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
