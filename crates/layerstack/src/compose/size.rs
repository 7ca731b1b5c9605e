//! Canvas size resolution for a single combination.
use crate::compose::backend::RasterBackend;
use crate::error::{Error, Result};
use crate::model::{Combination, GeneratorConfig};

/// Resolve the canvas dimensions for compositing `combination`.
///
/// With `use_original_size` off, the configured size is used unconditionally.
/// With it on, every referenced image is measured first and the canvas grows
/// to the largest natural width/height seen, floored at the configured size.
/// A decode failure during this pre-pass is a composite failure for the
/// offending layer; it never silently shrinks the canvas.
pub fn resolve_canvas_size<B: RasterBackend>(
    combination: &Combination,
    config: &GeneratorConfig,
    backend: &mut B,
) -> Result<(u32, u32)> {
    if !config.use_original_size {
        return Ok((config.image_width, config.image_height));
    }

    let mut width = config.image_width;
    let mut height = config.image_height;
    for (layer, url) in combination.iter() {
        let (w, h) = backend
            .decode_dimensions(url)
            .map_err(|e| Error::composite(layer, url, e))?;
        width = width.max(w);
        height = height.max(h);
    }

    Ok((width, height))
}
