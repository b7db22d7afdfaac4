// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop.rs
//
// Crop region and orientation domain model.

use std::str::FromStr;

use image::DynamicImage;

use super::session::Size;
use crate::constant::{FULL_ROTATION, ROTATION_STEP};

/// Crop region in source-image pixel coordinates.
///
/// Pure domain model - represents a rectangular region to crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Region covering the whole image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Largest square centered in the image.
    pub fn centered_square(width: u32, height: u32) -> Self {
        let side = width.min(height);
        Self::new((width - side) / 2, (height - side) / 2, side, side)
    }

    /// Check if region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Intersect with an image of the given size.
    pub fn clamp_to(&self, img_width: u32, img_height: u32) -> Option<Self> {
        let x = self.x.min(img_width);
        let y = self.y.min(img_height);
        let width = self.width.min(img_width - x);
        let height = self.height.min(img_height - y);
        let clamped = Self::new(x, y, width, height);
        clamped.is_valid().then_some(clamped)
    }

    /// Shrink to the largest centered square inside this region.
    pub fn squared(&self) -> Self {
        let side = self.width.min(self.height);
        Self::new(
            self.x + (self.width - side) / 2,
            self.y + (self.height - side) / 2,
            side,
            side,
        )
    }

    pub fn size(&self) -> Option<Size> {
        Size::new(self.width, self.height)
    }
}

impl FromStr for CropRegion {
    type Err = String;

    /// Parses `x,y,width,height`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("bad crop rect {s:?}: {e}"))?;

        match parts.as_slice() {
            [x, y, w, h] => Ok(Self::new(*x, *y, *w, *h)),
            _ => Err(format!("expected x,y,width,height, got {s:?}")),
        }
    }
}

/// Quarter-turn rotation, clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    None,
    Cw90,
    Cw180,
    Cw270,
}

impl Rotation {
    pub fn from_degrees(degrees: i16) -> Self {
        match degrees.rem_euclid(FULL_ROTATION) {
            90 => Self::Cw90,
            180 => Self::Cw180,
            270 => Self::Cw270,
            _ => Self::None,
        }
    }

    pub fn degrees(self) -> i16 {
        match self {
            Self::None => 0,
            Self::Cw90 => 90,
            Self::Cw180 => 180,
            Self::Cw270 => 270,
        }
    }

    /// True when width and height trade places.
    pub fn is_sideways(self) -> bool {
        matches!(self, Self::Cw90 | Self::Cw270)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDirection {
    Horizontal,
    Vertical,
}

/// Displayed orientation of the source image.
///
/// The source is mirrored first (if `mirrored`), then rotated clockwise.
/// Flips act on what is displayed, so they fold back into this form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Orientation {
    pub rotation: Rotation,
    pub mirrored: bool,
}

impl Orientation {
    /// Rotate the displayed image by `degrees` (multiples of 90).
    pub fn rotate(&mut self, degrees: i16) {
        let snapped = (degrees / ROTATION_STEP) * ROTATION_STEP;
        self.rotation = Rotation::from_degrees(self.rotation.degrees() + snapped);
    }

    pub fn flip(&mut self, direction: FlipDirection) {
        // H . R(r) = R(-r) . H and V = R(180) . H
        let base = match direction {
            FlipDirection::Horizontal => 0,
            FlipDirection::Vertical => 180,
        };
        self.rotation = Rotation::from_degrees(base - self.rotation.degrees());
        self.mirrored = !self.mirrored;
    }

    /// Render `image` in this orientation.
    pub fn apply(&self, image: &DynamicImage) -> DynamicImage {
        let mirrored = if self.mirrored {
            image.fliph()
        } else {
            image.clone()
        };

        match self.rotation {
            Rotation::None => mirrored,
            Rotation::Cw90 => mirrored.rotate90(),
            Rotation::Cw180 => mirrored.rotate180(),
            Rotation::Cw270 => mirrored.rotate270(),
        }
    }
}
