// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/raster.rs

use std::sync::Arc;

use image::{DynamicImage, GenericImageView};

use super::CropWidget;
use crate::app::{AppMessage, EventSender, worker};
use crate::constant::{FULL_ROTATION, ROTATION_STEP};
use crate::domain::crop::{CropRegion, FlipDirection, Orientation};
use crate::domain::uri::Uri;
use crate::host::PathResolver;

/// Crop view over a decoded raster image (PNG, JPEG, WebP, ...).
pub struct RasterCropView {
    resolver: Arc<dyn PathResolver>,
    listener: Option<EventSender>,
    /// The decoded source image, shared with extraction workers.
    image: Option<Arc<DynamicImage>>,
    /// Crop rectangle in source coordinates.
    region: Option<CropRegion>,
    /// Rectangle requested before the image was loaded.
    requested_region: Option<CropRegion>,
    /// How the source is drawn; flips fold into its rotation.
    orientation: Orientation,
    /// Clockwise rotation applied by the user, unaffected by flips.
    rotated_degrees: i16,
    fixed_square: bool,
}

impl RasterCropView {
    pub fn new(resolver: Arc<dyn PathResolver>) -> Self {
        Self {
            resolver,
            listener: None,
            image: None,
            region: None,
            requested_region: None,
            orientation: Orientation::default(),
            rotated_degrees: 0,
            fixed_square: false,
        }
    }

    /// Start with this crop rectangle instead of the whole image.
    pub fn with_crop_rect(mut self, region: Option<CropRegion>) -> Self {
        self.requested_region = region;
        self
    }

    /// Returns the native pixel dimensions (width, height) of the source.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(|img| img.dimensions())
    }

    fn initial_region(&self, width: u32, height: u32) -> CropRegion {
        let region = self
            .requested_region
            .and_then(|r| r.clamp_to(width, height))
            .unwrap_or_else(|| CropRegion::full(width, height));

        if self.fixed_square {
            region.squared()
        } else {
            region
        }
    }

    fn post(&self, message: AppMessage) {
        worker::post(self.listener.as_ref(), message);
    }
}

/// Cut `region` out of `image` and orient it as displayed.
pub(crate) fn extract(
    image: &DynamicImage,
    region: CropRegion,
    orientation: Orientation,
) -> DynamicImage {
    let cropped = image.crop_imm(region.x, region.y, region.width, region.height);
    orientation.apply(&cropped)
}

impl CropWidget for RasterCropView {
    fn set_on_crop_image_complete_listener(&mut self, listener: EventSender) {
        self.listener = Some(listener);
    }

    fn set_image_uri_async(&mut self, uri: &Uri) {
        self.image = None;
        self.region = None;

        let Some(path) = self.resolver.local_path(uri) else {
            self.post(AppMessage::ImageLoaded(Err(format!("cannot open {uri}"))));
            return;
        };

        worker::spawn(
            self.listener.clone(),
            move || {
                log::debug!("Decoding {}", path.display());
                let result = image::open(&path).map_err(|e| format!("{}: {e}", path.display()));
                AppMessage::ImageLoaded(result)
            },
            |e| AppMessage::ImageLoaded(Err(e)),
        );
    }

    fn on_image_loaded(&mut self, image: DynamicImage) {
        let (width, height) = image.dimensions();
        log::debug!("Loaded {width}x{height} image");
        self.region = Some(self.initial_region(width, height));
        self.image = Some(Arc::new(image));
    }

    fn set_fixed_aspect_ratio(&mut self, fixed: bool) {
        self.fixed_square = fixed;
        if fixed {
            self.region = self.region.map(|r| r.squared());
        }
    }

    fn rotate_image(&mut self, degrees: i16) {
        self.orientation.rotate(degrees);
        let snapped = (degrees / ROTATION_STEP) * ROTATION_STEP;
        self.rotated_degrees = (self.rotated_degrees + snapped).rem_euclid(FULL_ROTATION);
    }

    fn flip_image_horizontally(&mut self) {
        self.orientation.flip(FlipDirection::Horizontal);
    }

    fn flip_image_vertically(&mut self) {
        self.orientation.flip(FlipDirection::Vertical);
    }

    fn crop_rect(&self) -> Option<CropRegion> {
        self.region
    }

    fn rotated_degrees(&self) -> i16 {
        self.rotated_degrees
    }

    fn get_cropped_image_async(&mut self) {
        let (Some(image), Some(region)) = (self.image.clone(), self.region) else {
            self.post(AppMessage::CropImageComplete(Err("no image loaded".into())));
            return;
        };

        let orientation = self.orientation;
        worker::spawn(
            self.listener.clone(),
            move || AppMessage::CropImageComplete(Ok(extract(&image, region, orientation))),
            |e| AppMessage::CropImageComplete(Err(e)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::AuthorityResolver;
    use image::{Rgb, RgbImage};
    use tokio::sync::mpsc;

    fn view() -> RasterCropView {
        RasterCropView::new(Arc::new(AuthorityResolver::default()))
    }

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([x as u8, y as u8, 0])
        }))
    }

    #[test]
    fn default_region_covers_image() {
        let mut v = view();
        assert_eq!(v.crop_rect(), None);
        v.on_image_loaded(gradient(40, 30));
        assert_eq!(v.crop_rect(), Some(CropRegion::full(40, 30)));
        assert_eq!(v.dimensions(), Some((40, 30)));
    }

    #[test]
    fn fixed_ratio_squares_region() {
        let mut v = view();
        v.set_fixed_aspect_ratio(true);
        v.on_image_loaded(gradient(40, 30));
        assert_eq!(v.crop_rect(), Some(CropRegion::new(5, 0, 30, 30)));

        let mut late = view();
        late.on_image_loaded(gradient(10, 20));
        late.set_fixed_aspect_ratio(true);
        assert_eq!(late.crop_rect(), Some(CropRegion::new(0, 5, 10, 10)));
    }

    #[test]
    fn requested_region_is_clamped() {
        let mut v = view().with_crop_rect(Some(CropRegion::new(10, 10, 100, 5)));
        v.on_image_loaded(gradient(40, 30));
        assert_eq!(v.crop_rect(), Some(CropRegion::new(10, 10, 30, 5)));
    }

    #[test]
    fn flips_leave_reported_rotation_alone() {
        let mut v = view();
        v.flip_image_vertically();
        assert_eq!(v.rotated_degrees(), 0);

        v.rotate_image(90);
        v.flip_image_horizontally();
        v.flip_image_vertically();
        assert_eq!(v.rotated_degrees(), 90);

        v.rotate_image(-180);
        assert_eq!(v.rotated_degrees(), 270);
    }

    #[test]
    fn extract_crops_then_orients() {
        let region = CropRegion::new(2, 3, 4, 2);
        let mut orientation = Orientation::default();
        orientation.rotate(90);
        let out = extract(&gradient(10, 10), region, orientation);
        assert_eq!(out.dimensions(), (2, 4));
        // Top-left of a clockwise turn is the bottom-left of the crop.
        assert_eq!(out.get_pixel(0, 0).0[..2], [2, 4]);
    }

    #[tokio::test]
    async fn loads_and_extracts_through_listener() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.png");
        gradient(8, 6).save(&path).unwrap();

        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut v = view();
        v.set_on_crop_image_complete_listener(tx);
        v.set_image_uri_async(&Uri::from_path(&path));

        let Some(AppMessage::ImageLoaded(Ok(img))) = rx.recv().await else {
            panic!("expected a loaded image");
        };
        v.on_image_loaded(img);
        v.flip_image_horizontally();
        v.get_cropped_image_async();

        let Some(AppMessage::CropImageComplete(Ok(cropped))) = rx.recv().await else {
            panic!("expected a crop result");
        };
        assert_eq!(cropped.dimensions(), (8, 6));
        assert_eq!(cropped.get_pixel(0, 0).0[..2], [7, 0]);
    }

    #[tokio::test]
    async fn missing_file_reports_load_error() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut v = view();
        v.set_on_crop_image_complete_listener(tx);
        v.set_image_uri_async(&Uri::parse("file:///definitely/not/here.png").unwrap());
        assert!(matches!(rx.recv().await, Some(AppMessage::ImageLoaded(Err(_)))));

        v.get_cropped_image_async();
        assert!(matches!(
            rx.recv().await,
            Some(AppMessage::CropImageComplete(Err(_)))
        ));
    }
}
