// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/intent.rs
//
// Launch intent: what the caller asked the editor to open, and where to save.

use std::collections::HashMap;

use super::uri::{Scheme, Uri};
use crate::constant::{EXTRA_ASPECT_X, EXTRA_ASPECT_Y, EXTRA_CROP, EXTRA_OUTPUT};

/// Value stored under an intent extra key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraValue {
    Str(String),
    Int(i32),
    Bool(bool),
    Uri(Uri),
}

/// Key/value extras attached to an intent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extras(HashMap<String, ExtraValue>);

impl Extras {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: impl Into<String>, value: ExtraValue) -> &mut Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ExtraValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Integer value of an extra, 0 when absent or not an integer.
    pub fn get_int(&self, key: &str) -> i32 {
        match self.0.get(key) {
            Some(ExtraValue::Int(v)) => *v,
            _ => 0,
        }
    }
}

/// Intent the editor is launched with.
#[derive(Debug, Clone, Default)]
pub struct LaunchIntent {
    pub data: Option<String>,
    pub extras: Extras,
}

impl LaunchIntent {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            extras: Extras::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: ExtraValue) -> Self {
        self.extras.put(key, value);
        self
    }
}

/// Reasons a launch intent is rejected. Both close the editor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LaunchError {
    #[error("invalid image path")]
    InvalidPath,
    #[error("unknown file location: {0}")]
    UnknownLocation(String),
}

/// A validated launch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub source: Uri,
    pub destination: Uri,
    pub is_crop_intent: bool,
    pub fixed_square: bool,
}

impl EditRequest {
    /// Validate an intent.
    pub fn resolve(intent: &LaunchIntent) -> Result<Self, LaunchError> {
        let source = intent
            .data
            .as_deref()
            .and_then(|data| Uri::parse(data).ok())
            .ok_or(LaunchError::InvalidPath)?;

        if !matches!(source.scheme(), Scheme::File | Scheme::Content) {
            return Err(LaunchError::UnknownLocation(source.to_string()));
        }

        let extras = &intent.extras;
        let destination = match extras.get(EXTRA_OUTPUT) {
            None => source.clone(),
            Some(ExtraValue::Uri(uri)) => uri.clone(),
            Some(ExtraValue::Str(text)) => {
                Uri::parse(text).map_err(|_| LaunchError::InvalidPath)?
            }
            Some(_) => return Err(LaunchError::InvalidPath),
        };

        let is_crop_intent = is_crop_mode(extras);
        let fixed_square = is_crop_intent && should_crop_square(extras);

        Ok(Self {
            source,
            destination,
            is_crop_intent,
            fixed_square,
        })
    }
}

/// Crop mode is on only for the literal string `"true"`.
pub fn is_crop_mode(extras: &Extras) -> bool {
    matches!(extras.get(EXTRA_CROP), Some(ExtraValue::Str(v)) if v == "true")
}

/// Both aspect extras present and equal.
pub fn should_crop_square(extras: &Extras) -> bool {
    extras.contains_key(EXTRA_ASPECT_X)
        && extras.contains_key(EXTRA_ASPECT_Y)
        && extras.get_int(EXTRA_ASPECT_X) == extras.get_int(EXTRA_ASPECT_Y)
}
