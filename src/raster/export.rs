use super::Canvas;
use super::pdf::encode_pdf;
use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Output formats for a finished canvas
///
/// SVG and PDF are document wrappers around the same raster, not vector
/// redraws of the dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Bmp,
    Svg,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Bmp => "bmp",
            ExportFormat::Svg => "svg",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Append the format's extension when `path` has none
pub fn output_path(path: &Path, format: ExportFormat) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    }
}

/// Encode the canvas to disk
///
/// # Returns
/// The path actually written (with extension)
pub fn write_image(canvas: &Canvas, path: &Path, format: ExportFormat) -> Result<PathBuf> {
    let path = output_path(path, format);
    let bytes = match format {
        ExportFormat::Png => encode_raster(canvas, image::ImageFormat::Png)?,
        ExportFormat::Bmp => encode_raster(canvas, image::ImageFormat::Bmp)?,
        ExportFormat::Svg => encode_svg(canvas)?.into_bytes(),
        ExportFormat::Pdf => encode_pdf(canvas),
    };
    std::fs::write(&path, bytes)
        .with_context(|| format!("Failed to write image: {}", path.display()))?;
    Ok(path)
}

fn encode_raster(canvas: &Canvas, format: image::ImageFormat) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    canvas
        .as_image()
        .write_to(&mut Cursor::new(&mut bytes), format)
        .with_context(|| format!("Failed to encode {:?}", format))?;
    Ok(bytes)
}

/// SVG document holding the canvas as an embedded base64 PNG
pub fn encode_svg(canvas: &Canvas) -> Result<String> {
    let png = encode_raster(canvas, image::ImageFormat::Png)?;
    let (w, h) = (canvas.width(), canvas.height());
    Ok(format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            "  <image width=\"{w}\" height=\"{h}\" image-rendering=\"pixelated\" href=\"data:image/png;base64,{data}\"/>\n",
            "</svg>\n"
        ),
        w = w,
        h = h,
        data = STANDARD.encode(png)
    ))
}
