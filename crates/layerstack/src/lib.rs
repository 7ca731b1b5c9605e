#![forbid(unsafe_code)]
//! layerstack: combination generation and raster compositing for layered artwork.
//!
//! Modules:
//! - model: layers of candidate images, combinations, generator configuration
//! - select: combination selection (random draws, pinned picks, exhaustive enumeration)
//! - compose: canvas sizing and layer-by-layer compositing over a raster backend
//!
//! For examples and docs, see README and docs.rs.
pub mod compose;
pub mod error;
pub mod model;
pub mod select;

/// Convenient re-exports for common types. Import with `use layerstack::prelude::*;`.
pub mod prelude {
    pub use crate::compose::backend::RasterBackend;
    pub use crate::compose::runner::{
        composite, composite_all, composite_all_with_cancel, BatchFailure, BatchResult, CancelFlag,
    };
    pub use crate::compose::size::resolve_canvas_size;
    pub use crate::error::{Error, Result};
    pub use crate::model::{
        Combination, GenerationMode, GeneratorConfig, ImageItem, Layer, LayerName,
    };
    pub use crate::select::{
        pick_for_layer, select_all, select_combinations, select_preview, select_random,
        select_using_picks, AllCombinations,
    };
}
