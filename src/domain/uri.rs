// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/uri.rs
//
// Image locations: `file://` paths and provider-mediated `content://` URIs.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Characters escaped in the path of a `file://` URI. Non-ASCII is always escaped.
const PATH_ESCAPES: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// URI scheme of an image location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scheme {
    /// Direct filesystem path.
    File,
    /// Provider-mediated location, resolved to a path before writing.
    Content,
    /// Anything else (`http`, `mailto`, ...).
    Other(String),
}

impl Scheme {
    fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "file" => Self::File,
            "content" => Self::Content,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UriError {
    #[error("empty uri")]
    Empty,
    #[error("missing scheme in {0:?}")]
    MissingScheme(String),
}

/// A parsed location. Keeps the original text for display; the path is
/// percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uri {
    raw: String,
    scheme: Scheme,
    authority: String,
    path: String,
}

impl Uri {
    pub fn parse(text: &str) -> Result<Self, UriError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(UriError::Empty);
        }

        let Some((scheme, rest)) = text.split_once(':') else {
            return Err(UriError::MissingScheme(text.to_string()));
        };

        let valid_scheme = scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid_scheme {
            return Err(UriError::MissingScheme(text.to_string()));
        }

        let (authority, path) = match rest.strip_prefix("//") {
            Some(hier) => match hier.find('/') {
                Some(idx) => (hier[..idx].to_string(), hier[idx..].to_string()),
                None => (hier.to_string(), String::new()),
            },
            None => (String::new(), rest.to_string()),
        };

        Ok(Self {
            raw: text.to_string(),
            scheme: Scheme::from_name(scheme),
            authority,
            path: percent_decode_str(&path).decode_utf8_lossy().into_owned(),
        })
    }

    /// Build a `file://` URI for a local path.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let path = path.to_string_lossy().replace('\\', "/");
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };

        Self {
            raw: format!("file://{}", utf8_percent_encode(&path, PATH_ESCAPES)),
            scheme: Scheme::File,
            authority: String::new(),
            path,
        }
    }

    #[must_use]
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    #[must_use]
    pub fn authority(&self) -> &str {
        &self.authority
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Filesystem path for `file://` URIs.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        (self.scheme == Scheme::File && !self.path.is_empty()).then(|| PathBuf::from(&self.path))
    }
}

impl FromStr for Uri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
