// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message dispatch.

use super::{AppMessage, Editor, MenuAction, Toast};
use crate::constant::ROTATION_STEP;

impl Editor {
    pub fn update(&mut self, message: AppMessage) {
        if self.model.finished {
            log::debug!("Editor finished, ignoring message");
            return;
        }

        match message {
            AppMessage::Menu(action) => self.on_menu(action),

            AppMessage::ImageLoaded(Ok(image)) => {
                self.model.loading = false;
                self.view.on_image_loaded(image);
            }
            AppMessage::ImageLoaded(Err(e)) => {
                self.model.loading = false;
                log::error!("Failed to load image: {e}");
                self.toast(Toast::ImageEditingFailed(Some(e)));
                self.model.finish();
            }

            AppMessage::CropImageComplete(result) => {
                self.model.cropping = false;
                self.on_crop_image_complete(result);
            }

            AppMessage::SaveFinished(result) => {
                self.model.saving = false;
                self.on_save_finished(result);
            }

            AppMessage::Resumed => self.on_resume(),
            AppMessage::Stopped => self.on_stop(),
        }
    }

    fn on_menu(&mut self, action: MenuAction) {
        if !action.is_visible(self.model.session.is_crop_intent) {
            log::warn!("{action:?} is not available for crop requests");
            return;
        }
        if action.needs_image() && self.model.loading {
            log::debug!("Image still loading, ignoring {action:?}");
            return;
        }

        match action {
            MenuAction::SaveAs => self.request_crop(),
            MenuAction::Rotate => self.view.rotate_image(ROTATION_STEP),
            MenuAction::Resize => self.resize_image(),
            MenuAction::FlipHorizontal => self.view.flip_image_horizontally(),
            MenuAction::FlipVertical => self.view.flip_image_vertically(),
            MenuAction::Edit => self.edit_with(),
        }
    }
}
