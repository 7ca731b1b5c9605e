//! Lazy exhaustive enumeration of the Cartesian product of layer choices.
use crate::model::{Combination, Layer};

/// Iterator over every combination of per-layer image choices.
///
/// Layers without images are omitted from every combination rather than
/// contributing a product term. Enumeration order is deterministic: layer
/// order as given, image order as given, with later layers varying fastest.
/// When every layer is empty, exactly one empty combination is yielded.
///
/// Combinations are produced on demand, so truncation is a consumption stop
/// (`take(limit)`) instead of an early return inside the enumeration.
pub struct AllCombinations<'a> {
    layers: Vec<&'a Layer>,
    indices: Vec<usize>,
    done: bool,
}

impl<'a> AllCombinations<'a> {
    /// Create an enumerator over the non-empty layers of `layers`.
    pub fn new(layers: &'a [Layer]) -> Self {
        let layers: Vec<_> = layers
            .iter()
            .filter(|layer| !layer.images.is_empty())
            .collect();
        let indices = vec![0; layers.len()];
        Self {
            layers,
            indices,
            done: false,
        }
    }
}

impl Iterator for AllCombinations<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        if self.done {
            return None;
        }

        let mut combination = Combination::new();
        for (layer, &ix) in self.layers.iter().zip(&self.indices) {
            combination.push(layer.name.clone(), layer.images[ix].url.clone());
        }

        // Advance the index odometer, last layer fastest. No position left to
        // carry into means the product is exhausted.
        self.done = true;
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.layers[pos].images.len() {
                self.done = false;
                break;
            }
            self.indices[pos] = 0;
        }

        Some(combination)
    }
}

/// Enumerate at most `limit` combinations of the full Cartesian product.
///
/// Returns fewer than `limit` entries when the product is smaller; never
/// materializes more than `limit` combinations.
pub fn select_all(layers: &[Layer], limit: usize) -> Vec<Combination> {
    AllCombinations::new(layers).take(limit).collect()
}
