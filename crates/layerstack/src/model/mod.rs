//! Data model for layered artwork: layers of candidate images, concrete
//! combinations, and generator configuration.
pub mod combination;
pub mod config;
pub mod layer;

pub use combination::Combination;
pub use config::{GenerationMode, GeneratorConfig};
pub use layer::{ImageItem, Layer};

pub type LayerName = String;
