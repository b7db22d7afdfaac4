// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/session.rs
//
// Edit session state shared by menu actions and the save path.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use super::intent::EditRequest;
use super::uri::Uri;

/// Pixel dimensions, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl Size {
    /// Returns `None` if either side is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            width: NonZeroU32::new(width)?,
            height: NonZeroU32::new(height)?,
        })
    }

    pub fn width(self) -> u32 {
        self.width.get()
    }

    pub fn height(self) -> u32 {
        self.height.get()
    }

    /// Same size with the sides exchanged.
    #[must_use]
    pub fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = String;

    /// Parses `WIDTHxHEIGHT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
        let w: u32 = w.trim().parse().map_err(|e| format!("bad width: {e}"))?;
        let h: u32 = h.trim().parse().map_err(|e| format!("bad height: {e}"))?;
        Self::new(w, h).ok_or_else(|| format!("size must be positive, got {s:?}"))
    }
}

/// State of one editing screen.
#[derive(Debug, Clone)]
pub struct EditSession {
    pub source: Uri,
    pub destination: Uri,
    pub is_crop_intent: bool,
    /// Size chosen in the resize dialog, applied by the next file save.
    pub pending_resize: Option<Size>,
    pub is_editing_with_third_party: bool,
}

impl EditSession {
    pub fn new(request: &EditRequest) -> Self {
        Self {
            source: request.source.clone(),
            destination: request.destination.clone(),
            is_crop_intent: request.is_crop_intent,
            pending_resize: None,
            is_editing_with_third_party: false,
        }
    }
}
