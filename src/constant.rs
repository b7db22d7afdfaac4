// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Rotation step in degrees (90 = quarter turn).
pub const ROTATION_STEP: i16 = 90;

/// Full rotation in degrees (for modulo calculation in angle normalization).
pub const FULL_ROTATION: i16 = 360;

/// JPEG quality used when returning a crop to the caller.
pub const CROP_INTENT_QUALITY: u8 = 100;

/// Encoder quality used when saving to a file.
pub const SAVE_QUALITY: u8 = 90;

/// Intent extra: requested crop mode (`"true"` enables it).
pub const EXTRA_CROP: &str = "crop";

/// Intent extra: horizontal aspect ratio of a crop request.
pub const EXTRA_ASPECT_X: &str = "aspectX";

/// Intent extra: vertical aspect ratio of a crop request.
pub const EXTRA_ASPECT_Y: &str = "aspectY";

/// Intent extra: explicit output location.
pub const EXTRA_OUTPUT: &str = "output";

/// Directory name below the user config dir.
pub const CONFIG_DIR: &str = "gallery-editor";

/// Config file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Authority used for media content URIs.
pub const MEDIA_AUTHORITY: &str = "media";
