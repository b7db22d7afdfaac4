// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/encode.rs
//
// Encoding edited images for the caller or for disk.

use std::borrow::Cow;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::error::{ImageError, LimitErrorKind};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use super::session::Size;

/// Failure while writing an edited image.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("out of memory")]
    OutOfMemory,
    #[error(transparent)]
    Image(ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("save did not complete: {0}")]
    Worker(String),
}

impl From<ImageError> for SaveError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::Limits(ref limit)
                if matches!(limit.kind(), LimitErrorKind::InsufficientMemory) =>
            {
                Self::OutOfMemory
            }
            ImageError::IoError(io) => Self::Io(io),
            other => Self::Image(other),
        }
    }
}

/// Output format chosen from the target file's extension.
///
/// Unknown or missing extensions fall back to JPEG.
pub fn format_for_path(path: &Path) -> ImageFormat {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => ImageFormat::Png,
        Some("webp") => ImageFormat::WebP,
        Some("bmp") => ImageFormat::Bmp,
        Some("gif") => ImageFormat::Gif,
        Some("tif" | "tiff") => ImageFormat::Tiff,
        _ => ImageFormat::Jpeg,
    }
}

/// Scale to exactly `size` with nearest-neighbour sampling.
pub fn scale_unfiltered(image: &DynamicImage, size: Size) -> DynamicImage {
    image.resize_exact(size.width(), size.height(), FilterType::Nearest)
}

/// Whether the encoder for `format` takes `image`'s pixel layout as is.
fn is_native(image: &DynamicImage, format: ImageFormat) -> bool {
    use DynamicImage as D;

    match format {
        ImageFormat::Png => matches!(
            image,
            D::ImageLuma8(_)
                | D::ImageLumaA8(_)
                | D::ImageRgb8(_)
                | D::ImageRgba8(_)
                | D::ImageLuma16(_)
                | D::ImageLumaA16(_)
                | D::ImageRgb16(_)
                | D::ImageRgba16(_)
        ),
        ImageFormat::Tiff => matches!(
            image,
            D::ImageLuma8(_)
                | D::ImageRgb8(_)
                | D::ImageRgba8(_)
                | D::ImageLuma16(_)
                | D::ImageRgb16(_)
                | D::ImageRgba16(_)
        ),
        ImageFormat::Bmp => matches!(
            image,
            D::ImageLuma8(_) | D::ImageLumaA8(_) | D::ImageRgb8(_) | D::ImageRgba8(_)
        ),
        ImageFormat::WebP => matches!(image, D::ImageRgb8(_) | D::ImageRgba8(_)),
        ImageFormat::Gif => matches!(image, D::ImageRgba8(_)),
        _ => false,
    }
}

/// Convert `image` to a pixel layout the encoder for `format` accepts.
///
/// Anything the encoder cannot take drops to 8 bits per channel, keeping
/// alpha when there is one. GIF always gets RGBA.
pub fn encodable(image: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    if is_native(image, format) {
        return Cow::Borrowed(image);
    }

    match format {
        // JPEG has no alpha channel.
        ImageFormat::Jpeg => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
        ImageFormat::Gif => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
        _ if image.color().has_alpha() => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
        _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
    }
}

/// Encode `image` in `format`. `quality` applies to lossy formats only.
pub fn write_image<W: Write + Seek>(
    image: &DynamicImage,
    format: ImageFormat,
    quality: u8,
    writer: &mut W,
) -> Result<(), SaveError> {
    let image = encodable(image, format);
    match format {
        ImageFormat::Jpeg => {
            image.write_with_encoder(JpegEncoder::new_with_quality(writer, quality))?;
        }
        other => image.write_to(writer, other)?,
    }
    Ok(())
}

/// Encode to an in-memory JPEG.
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>, SaveError> {
    let mut buffer = Cursor::new(Vec::new());
    write_image(image, ImageFormat::Jpeg, quality, &mut buffer)?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageBuffer, Rgb, Rgba, RgbaImage};

    fn checker(width: u32, height: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 128])
            }
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(format_for_path(Path::new("a.PNG")), ImageFormat::Png);
        assert_eq!(format_for_path(Path::new("a.webp")), ImageFormat::WebP);
        assert_eq!(format_for_path(Path::new("a.tif")), ImageFormat::Tiff);
        assert_eq!(format_for_path(Path::new("a.jpeg")), ImageFormat::Jpeg);
        assert_eq!(format_for_path(Path::new("a.heic")), ImageFormat::Jpeg);
        assert_eq!(format_for_path(Path::new("noext")), ImageFormat::Jpeg);
    }

    #[test]
    fn jpeg_bytes_decode_back() {
        let bytes = encode_jpeg(&checker(8, 6), 100).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (8, 6));
    }

    #[test]
    fn lower_quality_is_smaller() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_fn(64, 64, |x, y| {
            Rgba([(x * 4) as u8, (y * 4) as u8, ((x * y) % 255) as u8, 255])
        }));
        let full = encode_jpeg(&img, 100).unwrap();
        let low = encode_jpeg(&img, 10).unwrap();
        assert!(low.len() < full.len());
    }

    #[test]
    fn png_keeps_pixels() {
        let img = checker(3, 3);
        let mut buffer = Cursor::new(Vec::new());
        write_image(&img, ImageFormat::Png, 90, &mut buffer).unwrap();
        let decoded = image::load_from_memory(buffer.get_ref()).unwrap();
        assert_eq!(decoded.to_rgba8(), img.to_rgba8());
    }

    #[test]
    fn sixteen_bit_source_saves_to_every_extension() {
        let deep = DynamicImage::ImageRgb16(ImageBuffer::from_fn(6, 4, |x, y| {
            Rgb([(x * 10_000) as u16, (y * 15_000) as u16, u16::MAX])
        }));

        for name in ["a.png", "a.jpg", "a.webp", "a.bmp", "a.gif", "a.tiff"] {
            let format = format_for_path(Path::new(name));
            let mut buffer = Cursor::new(Vec::new());
            write_image(&deep, format, 90, &mut buffer)
                .unwrap_or_else(|e| panic!("{name}: {e}"));

            let bytes = buffer.into_inner();
            assert_eq!(image::guess_format(&bytes).unwrap(), format, "{name}");
            let decoded = image::load_from_memory(&bytes).unwrap();
            assert_eq!(decoded.dimensions(), (6, 4), "{name}");
        }
    }

    #[test]
    fn encodable_keeps_native_layouts() {
        let rgba = checker(2, 2);
        assert!(matches!(encodable(&rgba, ImageFormat::Png), Cow::Borrowed(_)));
        assert!(matches!(encodable(&rgba, ImageFormat::Gif), Cow::Borrowed(_)));

        let grey16 = DynamicImage::ImageLuma16(ImageBuffer::new(2, 2));
        assert!(matches!(encodable(&grey16, ImageFormat::Png), Cow::Borrowed(_)));
        assert!(matches!(
            encodable(&grey16, ImageFormat::WebP).as_ref(),
            DynamicImage::ImageRgb8(_)
        ));
        assert!(matches!(
            encodable(&grey16, ImageFormat::Gif).as_ref(),
            DynamicImage::ImageRgba8(_)
        ));
    }

    #[test]
    fn scaling_is_exact_and_unfiltered() {
        let scaled = scale_unfiltered(&checker(2, 2), Size::new(4, 4).unwrap());
        assert_eq!(scaled.dimensions(), (4, 4));
        // Nearest sampling never invents intermediate colours.
        for (_, _, p) in scaled.pixels() {
            assert!(p.0 == [255, 255, 255, 255] || p.0 == [0, 0, 0, 128]);
        }
    }

    #[test]
    fn insufficient_memory_maps_to_out_of_memory() {
        let err = ImageError::Limits(image::error::LimitError::from_kind(
            LimitErrorKind::InsufficientMemory,
        ));
        assert!(matches!(SaveError::from(err), SaveError::OutOfMemory));
    }
}
