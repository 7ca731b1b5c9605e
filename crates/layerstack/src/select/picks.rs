//! Picks-based combination selection with a deterministic fallback.
use crate::model::{Combination, ImageItem, Layer};

/// Per-layer pick policy: the first image marked selected, else the first
/// image, else nothing for layers without images.
///
/// When more than one image carries the selected flag, the first match in the
/// layer's image order wins.
pub fn pick_for_layer(layer: &Layer) -> Option<&ImageItem> {
    layer
        .images
        .iter()
        .find(|image| image.selected)
        .or_else(|| layer.images.first())
}

/// Build one combination from each layer's pick. Never fails: every non-empty
/// layer has a deterministic fallback, empty layers are skipped.
pub fn select_using_picks(layers: &[Layer]) -> Combination {
    let mut combination = Combination::new();
    for layer in layers {
        if let Some(image) = pick_for_layer(layer) {
            combination.push(layer.name.clone(), image.url.clone());
        }
    }
    combination
}
