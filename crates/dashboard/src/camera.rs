//! Camera image upload with a cosmetic highlight overlay.
//!
//! Uploaded JPEG or PNG images get a fixed red rectangle drawn on them. The
//! rectangle is decoration only: it is drawn on every image and says nothing
//! about whether a fire is present.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};

/// Top-left corner of the highlight rectangle, in pixels.
pub const HIGHLIGHT_TOP_LEFT: (u32, u32) = (50, 50);
/// Bottom-right corner of the highlight rectangle, in pixels.
pub const HIGHLIGHT_BOTTOM_RIGHT: (u32, u32) = (200, 200);
/// Stroke width of the rectangle outline, centred on the edge.
pub const HIGHLIGHT_STROKE: u32 = 3;
/// Outline colour.
pub const HIGHLIGHT_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Errors from loading, annotating or saving a camera image.
#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    #[error("Failed to read or write image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode or encode image: {0}")]
    Image(#[from] image::ImageError),

    /// Only JPEG and PNG uploads are accepted.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
}

/// A decoded upload with the highlight drawn on it.
#[derive(Debug)]
pub struct AnnotatedImage {
    pub image: RgbImage,
    /// Format the upload was in; the annotated copy is written the same way.
    pub format: ImageFormat,
}

impl AnnotatedImage {
    /// Encode back into the upload's format.
    pub fn encode(&self) -> Result<Vec<u8>, OverlayError> {
        let mut buf = Cursor::new(Vec::new());
        self.image.write_to(&mut buf, self.format)?;
        Ok(buf.into_inner())
    }
}

/// Decode an uploaded image and draw the highlight rectangle on it.
pub fn annotate(bytes: &[u8]) -> Result<AnnotatedImage, OverlayError> {
    let format = image::guess_format(bytes)
        .map_err(|_| OverlayError::UnsupportedFormat("unrecognised data".to_string()))?;

    if !matches!(format, ImageFormat::Jpeg | ImageFormat::Png) {
        return Err(OverlayError::UnsupportedFormat(format!("{format:?}")));
    }

    let mut image = image::load_from_memory_with_format(bytes, format)?.to_rgb8();
    draw_highlight(&mut image);

    Ok(AnnotatedImage { image, format })
}

/// Annotate an image file and write the result next to it as
/// `<stem>.annotated.<ext>`. Returns the output path.
pub fn annotate_file(path: &Path) -> Result<PathBuf, OverlayError> {
    let bytes = std::fs::read(path)?;
    let annotated = annotate(&bytes)?;

    let output = annotated_path(path, annotated.format);
    std::fs::write(&output, annotated.encode()?)?;

    tracing::info!(
        input = %path.display(),
        output = %output.display(),
        width = annotated.image.width(),
        height = annotated.image.height(),
        "Annotated camera image",
    );

    Ok(output)
}

/// Output path for an annotated copy of `path`.
pub fn annotated_path(path: &Path, format: ImageFormat) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "camera".to_string());
    let ext = match format {
        ImageFormat::Png => "png",
        _ => "jpg",
    };
    path.with_file_name(format!("{stem}.annotated.{ext}"))
}

/// Draw the rectangle outline, clipped to the image bounds.
pub fn draw_highlight(image: &mut RgbImage) {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let half = HIGHLIGHT_STROKE / 2;
    let (x0, y0) = HIGHLIGHT_TOP_LEFT;
    let (x1, y1) = HIGHLIGHT_BOTTOM_RIGHT;

    let x_start = x0.saturating_sub(half);
    let y_start = y0.saturating_sub(half);
    let x_end = (x1 + half).min(width - 1);
    let y_end = (y1 + half).min(height - 1);

    if x_start > x_end || y_start > y_end {
        return;
    }

    for y in y_start..=y_end {
        for x in x_start..=x_end {
            let on_vertical_edge = x <= x0 + half || x + half >= x1;
            let on_horizontal_edge = y <= y0 + half || y + half >= y1;
            if on_vertical_edge || on_horizontal_edge {
                image.put_pixel(x, y, HIGHLIGHT_COLOR);
            }
        }
    }
}
