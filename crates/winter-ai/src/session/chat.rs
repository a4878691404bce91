//! Turn handling for SessionController (submit + reply reconciliation).

use tracing::{debug, info, warn};

use crate::prompt::compose;
use crate::{Message, Role};

use super::manager::SessionController;
use super::types::{BusyGuard, SessionEvent, SubmitOutcome};

impl SessionController {
    /// Submit `text` as one turn.
    ///
    /// The draft is only touched when the turn is accepted, in which case
    /// it is cleared like any other submission.
    pub async fn submit(&self, text: impl Into<String>) -> SubmitOutcome {
        self.run_turn(Some(text.into())).await
    }

    /// Submit the current draft as one turn.
    ///
    /// Whitespace-only input is ignored. While a request is pending the call
    /// returns [`SubmitOutcome::Busy`] immediately and leaves the draft
    /// alone. Otherwise the user message is logged, exactly one completion
    /// request is issued, and its reply (or the fallback notice) is logged
    /// before returning. Errors never escape this method.
    pub async fn submit_draft(&self) -> SubmitOutcome {
        self.run_turn(None).await
    }

    /// `text` of `None` takes the draft.
    async fn run_turn(&self, text: Option<String>) -> SubmitOutcome {
        // Emptiness check and slot claim share one critical section, so an
        // ignored submission never flips `pending` or races another turn.
        let (guard, user_message, len, prompt) = {
            let mut state = self.state();
            let candidate = text.as_deref().unwrap_or(state.draft.as_str());
            if candidate.trim().is_empty() {
                return SubmitOutcome::Empty;
            }

            let Some(guard) = BusyGuard::acquire(&self.pending) else {
                debug!("submission dropped: request already in flight");
                return SubmitOutcome::Busy;
            };

            let draft = std::mem::take(&mut state.draft);
            let text = text.unwrap_or(draft);
            let prompt = compose(state.log.all(), &text, self.settings.persona.as_deref());
            let message = Message::new(Role::User, text, state.log.stamp());
            let len = state.log.append(message.clone());
            (guard, message, len, prompt)
        };

        info!(len, "turn submitted");
        self.events.publish(SessionEvent::MessageAppended {
            message: user_message,
            len,
        });
        self.events.publish(SessionEvent::PendingChanged(true));

        let result = match prompt {
            Ok(prompt) => self.client.complete(&prompt).await,
            Err(e) => Err(e),
        };

        let (reply_text, outcome) = match result {
            Ok(text) if text.is_empty() => {
                debug!("completion returned no text");
                (self.settings.empty_reply_notice.clone(), SubmitOutcome::Replied)
            }
            Ok(text) => (text, SubmitOutcome::Replied),
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "completion failed");
                (self.settings.fallback_notice.clone(), SubmitOutcome::Failed(e))
            }
        };

        let (reply, len) = {
            let mut state = self.state();
            let message = Message::new(Role::Model, reply_text, state.log.stamp());
            let len = state.log.append(message.clone());
            (message, len)
        };
        drop(guard);

        debug!(len, "turn completed");
        self.events.publish(SessionEvent::MessageAppended {
            message: reply,
            len,
        });
        self.events.publish(SessionEvent::PendingChanged(false));

        outcome
    }
}
