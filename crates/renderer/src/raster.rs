//! PNG output by rasterizing the chart SVG with resvg.

use std::sync::Arc;

use tracing::debug;

use crate::error::{RenderError, RenderResult};

/// Rasterize an SVG document to PNG bytes.
///
/// `scale` multiplies the document's intrinsic size (1.0 = one pixel per
/// SVG unit). System fonts are loaded so axis labels and titles render.
pub fn svg_to_png(svg: &str, scale: f32) -> RenderResult<Vec<u8>> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(RenderError::Raster(format!("invalid scale {}", scale)));
    }

    let mut opt = usvg::Options::default();
    Arc::make_mut(&mut opt.fontdb).load_system_fonts();

    let tree =
        usvg::Tree::from_str(svg, &opt).map_err(|e| RenderError::SvgParse(e.to_string()))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| RenderError::Raster(format!("cannot allocate {}x{} pixmap", width, height)))?;

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|e| RenderError::Raster(e.to_string()))?;

    debug!(width, height, bytes = png.len(), "Rasterized chart");
    Ok(png)
}
