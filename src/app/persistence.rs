// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/persistence.rs
//
// What happens to a finished crop: hand it back to the caller, or save it.

use std::fs::File;
use std::io::{self, BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::DynamicImage;

use super::{AppMessage, CropResult, Editor, ResultCode, Toast, worker};
use crate::constant::{CROP_INTENT_QUALITY, SAVE_QUALITY};
use crate::domain::encode::{self, SaveError};
use crate::domain::session::Size;
use crate::domain::uri::{Scheme, Uri};
use crate::host::PathResolver;

/// Write `image` as a full-quality JPEG to `destination`.
///
/// Both the in-memory source and the output stream are released on every path.
/// Returns the number of bytes copied.
pub fn write_crop_result(
    resolver: &dyn PathResolver,
    destination: &Uri,
    image: &DynamicImage,
) -> anyhow::Result<u64> {
    let bytes = encode::encode_jpeg(image, CROP_INTENT_QUALITY).context("encoding crop")?;
    let mut input = Cursor::new(bytes);
    let mut output = resolver.open_output_stream(destination)?;
    let copied =
        io::copy(&mut input, &mut output).with_context(|| format!("writing {destination}"))?;
    output.flush().with_context(|| format!("flushing {destination}"))?;
    Ok(copied)
}

/// Encode `image` into `file`, scaled to `resize` if set.
///
/// The format comes from the extension of `path`.
pub fn save_bitmap(
    image: &DynamicImage,
    resize: Option<Size>,
    path: &Path,
    file: File,
) -> Result<(), SaveError> {
    let format = encode::format_for_path(path);
    let mut writer = BufWriter::new(file);

    match resize {
        Some(size) => {
            let resized = encode::scale_unfiltered(image, size);
            encode::write_image(&resized, format, SAVE_QUALITY, &mut writer)?;
        }
        None => encode::write_image(image, format, SAVE_QUALITY, &mut writer)?,
    }

    writer.flush()?;
    Ok(())
}

impl Editor {
    pub(super) fn on_crop_image_complete(&mut self, result: CropResult) {
        let image = match result {
            Ok(image) => image,
            Err(e) => {
                log::error!("Crop failed: {e}");
                self.toast(Toast::ImageEditingFailed(Some(e)));
                return;
            }
        };

        if self.model.session.is_crop_intent {
            self.return_crop(&image);
            return;
        }

        let destination = self.model.session.destination.clone();
        match destination.scheme() {
            Scheme::File => match destination.file_path() {
                Some(path) => self.save_as(image, &path),
                None => self.toast(Toast::ImageEditingFailed(None)),
            },
            Scheme::Content => match self.host.resolver.real_path(&destination) {
                Some(path) if !path.as_os_str().is_empty() => self.save_as(image, &path),
                _ => {
                    log::warn!("Could not resolve {destination} to a path");
                    self.toast(Toast::ImageEditingFailed(None));
                }
            },
            Scheme::Other(_) => self.toast(Toast::UnknownFileLocation),
        }
    }

    /// Crop requests get the cropped region back at its original scale.
    fn return_crop(&mut self, image: &DynamicImage) {
        let destination = &self.model.session.destination;
        match write_crop_result(self.host.resolver.as_ref(), destination, image) {
            Ok(bytes) => {
                log::info!("Returned {bytes} bytes to {destination}");
                self.model.set_result(ResultCode::Ok);
                self.model.finish();
            }
            Err(e) => {
                log::error!("Failed to return crop: {e:#}");
                self.toast(Toast::ImageEditingFailed(Some(format!("{e:#}"))));
            }
        }
    }

    fn save_as(&mut self, image: DynamicImage, suggested: &Path) {
        match self.host.dialogs.save_as(suggested) {
            Some(path) => self.save_bitmap_to_file(image, path),
            None => log::debug!("Save cancelled"),
        }
    }

    /// Open the target here, encode on a worker, report back via `SaveFinished`.
    fn save_bitmap_to_file(&mut self, image: DynamicImage, path: PathBuf) {
        let file = match File::create(&path) {
            Ok(file) => file,
            Err(e) => {
                log::error!("Cannot open {} for writing: {e}", path.display());
                self.toast(Toast::ImageEditingFailed(None));
                return;
            }
        };

        let resize = self.model.session.pending_resize;
        self.model.saving = true;

        worker::spawn(
            Some(self.events.clone()),
            move || {
                log::debug!("Writing {}", path.display());
                AppMessage::SaveFinished(save_bitmap(&image, resize, &path, file).map(|()| path))
            },
            |e| AppMessage::SaveFinished(Err(SaveError::Worker(e))),
        );
    }

    pub(super) fn on_save_finished(&mut self, result: Result<PathBuf, SaveError>) {
        match result {
            Ok(path) => {
                if let Err(e) = self.host.scanner.scan_path(&path) {
                    log::warn!("Media scan failed: {e:#}");
                }
                self.model.set_result(ResultCode::Ok);
                self.toast(Toast::FileSaved);
                self.model.finish();
            }
            Err(SaveError::OutOfMemory) => {
                log::error!("Out of memory while saving");
                self.toast(Toast::OutOfMemory);
            }
            Err(e) => {
                log::error!("Save failed: {e}");
                self.toast(Toast::Error(e.to_string()));
            }
        }
    }
}
