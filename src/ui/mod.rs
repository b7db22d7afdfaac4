// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/mod.rs
//
// Terminal front end: scripted dialogs and toasts on stderr.

pub mod dialogs;
pub mod notifier;

pub use dialogs::{SaveAsAnswer, ScriptedDialogs};
pub use notifier::StderrNotifier;
