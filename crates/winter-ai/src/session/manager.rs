//! SessionController struct and read-side accessors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::broadcast;
use tracing::debug;
use winter_common::EventBus;

use crate::message_log::MessageLog;
use crate::{CompletionClient, Message, Role};

use super::types::{SessionEvent, SessionPhase, SessionSettings, SessionSnapshot};

const EVENT_CAPACITY: usize = 64;

pub(super) struct SessionState {
    pub(super) log: MessageLog,
    pub(super) draft: String,
}

/// Single-writer owner of a chat session.
///
/// All methods take `&self`; share it behind an `Arc` when the renderer and
/// the input loop live in different tasks.
pub struct SessionController {
    pub(super) client: Arc<dyn CompletionClient>,
    pub(super) settings: SessionSettings,
    /// Never held across an `.await`.
    pub(super) state: Mutex<SessionState>,
    /// True exactly while a completion request is outstanding.
    pub(super) pending: AtomicBool,
    pub(super) events: EventBus<SessionEvent>,
}

impl SessionController {
    /// Start a session whose log is seeded with the greeting.
    pub fn new(client: Arc<dyn CompletionClient>, settings: SessionSettings) -> Self {
        let mut log = MessageLog::new();
        let seed = Message::new(Role::Model, settings.greeting.clone(), log.stamp());
        log.append(seed);
        debug!("session started");

        Self {
            client,
            settings,
            state: Mutex::new(SessionState {
                log,
                draft: String::new(),
            }),
            pending: AtomicBool::new(false),
            events: EventBus::new(EVENT_CAPACITY),
        }
    }

    pub(super) fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Receive a notification for every log append and pending flip.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_pending() {
            SessionPhase::AwaitingReply
        } else {
            SessionPhase::Idle
        }
    }

    /// Replace the not-yet-submitted input text.
    pub fn set_draft(&self, text: impl Into<String>) {
        self.state().draft = text.into();
    }

    pub fn draft(&self) -> String {
        self.state().draft.clone()
    }

    /// Copy of the full transcript.
    pub fn messages(&self) -> Vec<Message> {
        self.state().log.all().to_vec()
    }

    pub fn message_count(&self) -> usize {
        self.state().log.len()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state();
        SessionSnapshot {
            messages: state.log.all().to_vec(),
            pending: self.is_pending(),
            draft: state.draft.clone(),
        }
    }
}
