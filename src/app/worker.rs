// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/worker.rs
//
// Blocking jobs whose result comes back to the event loop as a message.

use super::{AppMessage, EventSender};

/// Deliver `message` to `listener`, logging when nobody is listening.
pub(crate) fn post(listener: Option<&EventSender>, message: AppMessage) {
    match listener {
        Some(listener) => {
            if listener.send(message).is_err() {
                log::warn!("Editor is gone, dropping result");
            }
        }
        None => log::warn!("No listener registered, dropping result"),
    }
}

/// Run `job` on the blocking pool and post its message to `listener`.
///
/// If the job panics or is cancelled, `on_failure` builds the message
/// instead, so the loop always hears back exactly once.
pub(crate) fn spawn<J, F>(listener: Option<EventSender>, job: J, on_failure: F)
where
    J: FnOnce() -> AppMessage + Send + 'static,
    F: FnOnce(String) -> AppMessage + Send + 'static,
{
    let handle = tokio::task::spawn_blocking(job);
    tokio::spawn(async move {
        let message = match handle.await {
            Ok(message) => message,
            Err(e) => {
                log::error!("Background job failed: {e}");
                on_failure(e.to_string())
            }
        };
        post(listener.as_ref(), message);
    });
}
