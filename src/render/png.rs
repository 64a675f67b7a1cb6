//! Rasterization — SVG scene to PNG bytes via usvg/resvg/tiny-skia.

use resvg::{tiny_skia, usvg};

use crate::error::{Result, VizError};
use crate::render::svg::Canvas;

/// Rasterize an SVG document onto a pixmap of the canvas size and encode it
/// as PNG.
pub fn rasterize(svg: &str, canvas: &Canvas) -> Result<Vec<u8>> {
    let mut options = usvg::Options::default();
    options.font_family = "Arial".to_string();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| VizError::Render(format!("invalid SVG scene: {e}")))?;

    let width = canvas.width.round() as u32;
    let height = canvas.height.round() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| VizError::Render(format!("cannot allocate {width}x{height} pixmap")))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| VizError::Render(format!("PNG encoding failed: {e}")))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
