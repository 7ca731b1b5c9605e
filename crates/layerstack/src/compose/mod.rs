//! Compositing pipeline: canvas sizing and layer-by-layer drawing of a
//! combination onto a raster backend, single or batched.
pub mod backend;
pub mod runner;
pub mod size;

pub use backend::RasterBackend;
pub use runner::{
    composite, composite_all, composite_all_with_cancel, BatchFailure, BatchResult, CancelFlag,
};
pub use size::resolve_canvas_size;
