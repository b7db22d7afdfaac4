// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: menu actions, background completions, lifecycle.

use std::path::PathBuf;

use image::DynamicImage;

use crate::app::menu::MenuAction;
use crate::domain::encode::SaveError;

/// Outcome of a crop extraction: the cropped image or the engine's error text.
pub type CropResult = Result<DynamicImage, String>;

#[derive(Debug)]
pub enum AppMessage {
    // User actions.
    Menu(MenuAction),

    // Crop view callbacks.
    ImageLoaded(Result<DynamicImage, String>),
    CropImageComplete(CropResult),

    // Background save.
    SaveFinished(Result<PathBuf, SaveError>),

    // Screen lifecycle.
    Resumed,
    Stopped,
}

impl From<MenuAction> for AppMessage {
    fn from(action: MenuAction) -> Self {
        Self::Menu(action)
    }
}
