// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/runtime.rs
//
// Event loop: the single thread that owns the editor.

use tokio::sync::mpsc::UnboundedReceiver;

use super::{AppMessage, Editor, ResultCode};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub result: ResultCode,
    /// The editor closed itself; `false` means the script ran out first.
    pub finished: bool,
}

/// Drive `editor` until it finishes or `script` runs out.
///
/// Scripted messages stand in for user input, so the next one is only fed
/// once no load, crop or save is in flight. Background completions arrive
/// on `events` and are handled here, never on the worker.
pub async fn run<I>(
    mut editor: Editor,
    mut events: UnboundedReceiver<AppMessage>,
    script: I,
) -> RunOutcome
where
    I: IntoIterator<Item = AppMessage>,
{
    let mut script = script.into_iter();

    while !editor.is_finished() {
        if !editor.is_busy() {
            match script.next() {
                Some(message) => {
                    editor.update(message);
                    continue;
                }
                None => break,
            }
        }

        match events.recv().await {
            Some(message) => editor.update(message),
            None => break,
        }
    }

    RunOutcome {
        result: editor.result(),
        finished: editor.is_finished(),
    }
}
