//! Outbound prompt composition.
//!
//! Every turn is sent as the persona preamble followed by the latest user
//! utterance. Earlier turns are not forwarded, so the model sees each turn
//! in isolation even though the visible transcript keeps growing.

use crate::{CompletionError, Message};

/// Built-in persona preamble.
pub const DEFAULT_PERSONA: &str = "\
You are a high-end AI assistant for a 2nd-year B.Tech student's portfolio named \"Winter Edition\".
The student is interested in AI/ML, Computer Vision, and Solving Real World Problems.

Knowledge Base:
- Skills: Python, React, Three.js, PyTorch, TensorFlow, Solidity.
- Projects: Neural Vision Core (CV), Predictive Market Bot (Finance), Generative Art Engine, Smart Health Ledger.
- Interests: Building scalable solutions, futurism, generative AI, edge computing.

Persona: Futuristic, precise, slightly cryptic but helpful. Use technical jargon appropriately.
Response Style: Short, punchy, markdown enabled.";

/// Placed between the preamble and the user's text.
pub const USER_INPUT_SEPARATOR: &str = "\n\nUser Input: ";

/// A single-content payload ready for a [`crate::CompletionClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    text: String,
}

impl Prompt {
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Build the outbound prompt for one turn.
///
/// `_history` is accepted so callers hand over the full transcript, but it
/// is intentionally not included in the payload.
pub fn compose(
    _history: &[Message],
    new_user_text: &str,
    persona: Option<&str>,
) -> Result<Prompt, CompletionError> {
    let persona = persona.ok_or_else(|| {
        CompletionError::Configuration("persona preamble is not available".into())
    })?;

    let mut text =
        String::with_capacity(persona.len() + USER_INPUT_SEPARATOR.len() + new_user_text.len());
    text.push_str(persona);
    text.push_str(USER_INPUT_SEPARATOR);
    text.push_str(new_user_text);

    Ok(Prompt { text })
}
