// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/toast.rs
//
// User-facing messages.

use std::fmt;

use crate::domain::intent::LaunchError;
use crate::fl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toast {
    InvalidImagePath,
    UnknownFileLocation,
    UnknownErrorOccurred,
    /// Generic editing failure, with the underlying error when known.
    ImageEditingFailed(Option<String>),
    OutOfMemory,
    /// Any other error while saving.
    Error(String),
    NoEditorFound,
    FileSaved,
}

impl From<&LaunchError> for Toast {
    fn from(err: &LaunchError) -> Self {
        match err {
            LaunchError::InvalidPath => Self::InvalidImagePath,
            LaunchError::UnknownLocation(_) => Self::UnknownFileLocation,
        }
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InvalidImagePath => fl!("invalid-image-path"),
            Self::UnknownFileLocation => fl!("unknown-file-location"),
            Self::UnknownErrorOccurred => fl!("unknown-error-occurred"),
            Self::ImageEditingFailed(None) => fl!("image-editing-failed"),
            Self::ImageEditingFailed(Some(cause)) => {
                fl!("image-editing-failed-cause", cause = cause.as_str())
            }
            Self::OutOfMemory => fl!("out-of-memory"),
            Self::Error(cause) => fl!("error-occurred", cause = cause.as_str()),
            Self::NoEditorFound => fl!("no-editor-found"),
            Self::FileSaved => fl!("file-saved"),
        };
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_english_messages() {
        assert_eq!(Toast::FileSaved.to_string(), "File saved");
        assert_eq!(
            Toast::NoEditorFound.to_string(),
            "No app found to edit this image"
        );
        assert_eq!(
            Toast::ImageEditingFailed(None).to_string(),
            "Image editing failed"
        );
    }

    #[test]
    fn interpolates_cause_without_isolation_marks() {
        assert_eq!(
            Toast::ImageEditingFailed(Some("disk full".into())).to_string(),
            "Image editing failed: disk full"
        );
        assert_eq!(
            Toast::Error("bad header".into()).to_string(),
            "An error occurred: bad header"
        );
    }

    #[test]
    fn launch_errors_map_to_messages() {
        assert_eq!(Toast::from(&LaunchError::InvalidPath), Toast::InvalidImagePath);
        assert_eq!(
            Toast::from(&LaunchError::UnknownLocation("http".into())),
            Toast::UnknownFileLocation
        );
    }
}
