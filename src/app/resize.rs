// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/resize.rs
//
// Resize flow: ask for an output size, then save at that size.

use super::{Editor, Toast};
use crate::domain::crop::{CropRegion, Rotation};
use crate::domain::session::Size;

/// Output size of the crop area as displayed.
///
/// The rectangle is in source orientation, so quarter turns swap the sides.
pub fn area_size(rect: Option<CropRegion>, rotated_degrees: i16) -> Option<Size> {
    let size = rect?.size()?;
    if Rotation::from_degrees(rotated_degrees).is_sideways() {
        Some(size.transposed())
    } else {
        Some(size)
    }
}

impl Editor {
    pub(super) fn resize_image(&mut self) {
        let Some(current) = area_size(self.view.crop_rect(), self.view.rotated_degrees()) else {
            self.toast(Toast::UnknownErrorOccurred);
            return;
        };

        let Some(chosen) = self.host.dialogs.resize(current) else {
            log::debug!("Resize cancelled");
            return;
        };

        log::info!("Resizing {current} -> {chosen}");
        self.model.session.pending_resize = Some(chosen);
        self.request_crop();
    }
}
