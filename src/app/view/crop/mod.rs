// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Crop view: the image widget the editor configures and crops from.

mod raster;

pub use raster::RasterCropView;

use image::DynamicImage;

use crate::app::EventSender;
use crate::domain::crop::CropRegion;
use crate::domain::uri::Uri;

/// Cropping widget driven by the editor.
///
/// Loading and extraction are asynchronous: results arrive on the listener
/// as `AppMessage::ImageLoaded` and `AppMessage::CropImageComplete`.
pub trait CropWidget: Send {
    /// Register the only receiver of load and crop completions.
    fn set_on_crop_image_complete_listener(&mut self, listener: EventSender);

    /// Start loading the image behind `uri`.
    fn set_image_uri_async(&mut self, uri: &Uri);

    /// Install an image decoded by `set_image_uri_async`.
    fn on_image_loaded(&mut self, image: DynamicImage);

    /// Lock the crop rectangle to a 1:1 ratio.
    fn set_fixed_aspect_ratio(&mut self, fixed: bool);

    fn rotate_image(&mut self, degrees: i16);

    fn flip_image_horizontally(&mut self);

    fn flip_image_vertically(&mut self);

    /// Current crop rectangle in source coordinates, `None` before load.
    fn crop_rect(&self) -> Option<CropRegion>;

    /// Clockwise rotation the user applied, in degrees. Flips leave it unchanged.
    fn rotated_degrees(&self) -> i16;

    /// Start extracting the cropped image.
    fn get_cropped_image_async(&mut self);
}
