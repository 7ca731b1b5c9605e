//! Layers and the candidate images they hold.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::LayerName;

/// A single candidate image inside a layer.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct ImageItem {
    /// Opaque identifier, unique within its layer.
    pub id: String,
    /// Display name; not guaranteed unique.
    pub name: String,
    /// Handle the raster backend resolves into pixel data.
    pub url: String,
    /// Marks this image as the layer's pinned choice for picks-based selection.
    #[cfg_attr(feature = "serde", serde(default))]
    pub selected: bool,
}

impl ImageItem {
    /// Create a new image item with required fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            selected: false,
        }
    }

    /// Set the selected flag.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// A named slot in the compositing stack holding candidate images.
///
/// The order of layers in a list is the compositing stack order: the first
/// layer is the bottom, each subsequent layer is drawn on top of it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Layer {
    /// Unique name within a layer list; keys combinations.
    pub name: LayerName,
    /// Candidate images in their given order.
    pub images: Vec<ImageItem>,
}

impl Layer {
    /// Create a new layer with the given name and no images.
    pub fn new(name: impl Into<LayerName>) -> Self {
        Self {
            name: name.into(),
            images: Vec::new(),
        }
    }

    /// Add a single image to the layer.
    pub fn with_image(mut self, image: ImageItem) -> Self {
        self.images.push(image);
        self
    }

    /// Add multiple images to the layer.
    pub fn with_images(mut self, images: Vec<ImageItem>) -> Self {
        self.images.extend(images);
        self
    }

    /// Whether the layer holds no candidate images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
