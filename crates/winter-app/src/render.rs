//! Terminal transcript renderer.
//!
//! Subscribes to session events and prints each appended message. The
//! renderer only reads; all state changes go through the controller.

use std::io::Write;
use std::sync::Weak;

use chrono::{DateTime, Local};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::broadcast::Receiver;
use winter_ai::{Message, SessionController, SessionEvent};

const WORKING_INDICATOR: &str = "[System] ▍▍▍ processing...";

/// Local wall-clock time of a message, `HH:MM:SS`.
pub fn format_time(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}

/// One transcript line: `HH:MM:SS [Label] text`.
pub fn format_message(message: &Message) -> String {
    format!(
        "{} [{}] {}",
        format_time(message.timestamp()),
        message.role().label(),
        message.text()
    )
}

pub fn print_transcript(messages: &[Message]) {
    let mut out = std::io::stdout().lock();
    for message in messages {
        let _ = writeln!(out, "{}", format_message(message));
    }
}

/// Print every change received on `rx` until the controller is dropped.
///
/// Holds only a weak reference so the channel closes, and buffered events
/// drain, once the owner lets go of the session.
pub async fn run(controller: Weak<SessionController>, mut rx: Receiver<SessionEvent>) {
    loop {
        match rx.recv().await {
            Ok(SessionEvent::MessageAppended { message, .. }) => {
                println!("{}", format_message(&message));
            }
            Ok(SessionEvent::PendingChanged(true)) => println!("{WORKING_INDICATOR}"),
            Ok(SessionEvent::PendingChanged(false)) => {}
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "renderer fell behind, reprinting transcript");
                if let Some(controller) = controller.upgrade() {
                    print_transcript(&controller.messages());
                }
            }
            Err(RecvError::Closed) => break,
        }
    }
}
