use std::path::Path;

use anyhow::Context as _;

use crate::{foundation::error::CutfaceResult, raster::framebuffer::Framebuffer};

/// Expand a framebuffer to straight RGBA8. Pixels outside the panel's row bounds come out
/// fully transparent.
pub fn to_rgba_image(fb: &Framebuffer) -> image::RgbaImage {
    image::RgbaImage::from_fn(u32::from(fb.width()), u32::from(fb.height()), |x, y| {
        let rgba = fb
            .pixel(x as u16, y as u16)
            .map_or([0, 0, 0, 0], |c| c.to_rgba8());
        image::Rgba(rgba)
    })
}

/// Write `fb` to `path` as PNG, creating missing parent directories.
pub fn write_png(fb: &Framebuffer, path: &Path) -> CutfaceResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    to_rgba_image(fb)
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote png");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
