//! Raster backend capability interface.
//!
//! The compositor never decodes or renders pixels itself; it drives an
//! implementation of [`RasterBackend`] supplied by the environment (an image
//! library, a GPU surface, a browser canvas behind FFI). Implementations map
//! their native failures onto [`crate::error::Error::Decode`],
//! [`crate::error::Error::Draw`] and [`crate::error::Error::Encode`].
use crate::error::Result;

/// External capability for decoding, drawing and encoding images.
pub trait RasterBackend {
    /// Drawing surface owned by a single composite operation.
    type Canvas;
    /// Encoded output raster, e.g. PNG bytes or a handle.
    type Output;

    /// Query the natural dimensions of the image behind `url`.
    fn decode_dimensions(&mut self, url: &str) -> Result<(u32, u32)>;

    /// Allocate a cleared canvas of the given size.
    fn create_canvas(&mut self, width: u32, height: u32) -> Result<Self::Canvas>;

    /// Draw the image behind `url`, stretched to exactly fill the
    /// `width` x `height` rectangle of `canvas`.
    fn draw_scaled(
        &mut self,
        canvas: &mut Self::Canvas,
        url: &str,
        width: u32,
        height: u32,
    ) -> Result<()>;

    /// Encode the finished canvas into the output raster.
    fn encode(&mut self, canvas: Self::Canvas) -> Result<Self::Output>;
}
