//! Uniform random combination selection.
use rand::RngCore;

use crate::model::{Combination, Layer};
use crate::select::rand_index;

/// Draw one combination: for each layer with at least one image, pick an
/// image uniformly at random. Draws are independent per layer; layers without
/// images are skipped.
pub fn select_random<R: RngCore>(layers: &[Layer], rng: &mut R) -> Combination {
    let mut combination = Combination::new();
    for layer in layers {
        if layer.images.is_empty() {
            continue;
        }
        let ix = rand_index(rng, layer.images.len());
        combination.push(layer.name.clone(), layer.images[ix].url.clone());
    }
    combination
}
