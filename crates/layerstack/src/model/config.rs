//! Generator configuration and explicit generation modes.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Explicit caller intent for which selection strategy to run.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationMode {
    /// Independent uniform draws, one combination per draw.
    Random,
    /// One combination built from per-layer pinned images.
    Selected,
    /// Exhaustive enumeration, subject to [`GeneratorConfig::random_mode`].
    All,
}

/// Configuration for combination generation and compositing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Upper bound on combinations produced in one request.
    pub max_to_generate: usize,
    /// Fallback/minimum canvas width in pixels.
    pub image_width: u32,
    /// Fallback/minimum canvas height in pixels.
    pub image_height: u32,
    /// When no explicit mode pins it, prefer random draws over enumeration.
    pub random_mode: bool,
    /// Expand the canvas to the largest natural image dimensions in use,
    /// floored at `image_width`/`image_height`.
    pub use_original_size: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_to_generate: 10,
            image_width: 512,
            image_height: 512,
            random_mode: true,
            use_original_size: true,
        }
    }
}

impl GeneratorConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of combinations to generate.
    pub fn with_max_to_generate(mut self, max_to_generate: usize) -> Self {
        self.max_to_generate = max_to_generate;
        self
    }

    /// Sets the fallback/minimum canvas size in pixels.
    pub fn with_image_size(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Sets whether unpinned generation draws randomly instead of enumerating.
    pub fn with_random_mode(mut self, random_mode: bool) -> Self {
        self.random_mode = random_mode;
        self
    }

    /// Sets whether the canvas grows to the largest natural image size.
    pub fn with_use_original_size(mut self, use_original_size: bool) -> Self {
        self.use_original_size = use_original_size;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.max_to_generate == 0 {
            return Err(Error::InvalidConfig("max_to_generate must be > 0".into()));
        }
        if self.image_width == 0 || self.image_height == 0 {
            return Err(Error::InvalidConfig(
                "image_width and image_height must be > 0".into(),
            ));
        }

        Ok(())
    }
}
