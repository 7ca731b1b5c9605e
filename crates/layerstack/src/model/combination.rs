//! One concrete choice of image per layer.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::LayerName;

/// An ordered sequence of `(layer name, image url)` entries.
///
/// Entry order is the compositing stack order and is carried explicitly; a
/// layer contributes at most one entry, and layers without images contribute
/// none. An unordered map would lose the stacking order the compositor
/// depends on.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Combination {
    entries: Vec<(LayerName, String)>,
}

impl Combination {
    /// Create a new empty combination.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry for a layer; callers keep entries in stack order.
    pub fn push(&mut self, layer: impl Into<LayerName>, url: impl Into<String>) {
        self.entries.push((layer.into(), url.into()));
    }

    /// Look up the url chosen for a layer, if the layer has an entry.
    pub fn get(&self, layer: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == layer)
            .map(|(_, url)| url.as_str())
    }

    /// Iterate entries in stack order, bottom layer first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, url)| (name.as_str(), url.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the combination holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(LayerName, String)> for Combination {
    fn from_iter<I: IntoIterator<Item = (LayerName, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Combination {
    type Item = (LayerName, String);
    type IntoIter = std::vec::IntoIter<(LayerName, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_insertion_order() {
        let mut combination = Combination::new();
        combination.push("Background", "bg.png");
        combination.push("Body", "body.png");
        combination.push("Hat", "hat.png");

        let layers: Vec<_> = combination.iter().map(|(name, _)| name).collect();
        assert_eq!(layers, vec!["Background", "Body", "Hat"]);
    }

    #[test]
    fn get_finds_entry_by_layer() {
        let mut combination = Combination::new();
        combination.push("Body", "body.png");
        assert_eq!(combination.get("Body"), Some("body.png"));
        assert_eq!(combination.get("Hat"), None);
    }

    #[test]
    fn empty_combination_reports_empty() {
        let combination = Combination::new();
        assert!(combination.is_empty());
        assert_eq!(combination.len(), 0);
    }
}
