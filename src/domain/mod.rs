// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Domain layer: locations, launch intents, session state and image operations.

pub mod crop;
pub mod encode;
pub mod intent;
pub mod session;
pub mod uri;
