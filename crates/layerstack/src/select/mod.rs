//! Combination selection strategies.
//!
//! This module decides which per-layer image combinations to realize before
//! any compositing happens:
//! - [select_random]: one uniform independent draw per non-empty layer.
//! - [select_using_picks]: pinned images with a deterministic first-image fallback.
//! - [AllCombinations] / [select_all]: lazy exhaustive enumeration of the
//!   Cartesian product, truncated by consumption.
//! - [select_combinations]: the mode state machine tying the three together.
//!
//! Selection never fails: layers without images are skipped, never an error,
//! since a user mid-setup routinely has empty layers.
use rand::RngCore;

use crate::model::{Combination, GenerationMode, GeneratorConfig, Layer};

pub mod exhaustive;
pub mod picks;
pub mod random;

pub use exhaustive::{select_all, AllCombinations};
pub use picks::{pick_for_layer, select_using_picks};
pub use random::select_random;

/// Produce the combinations for one generation request.
///
/// Mode resolution: `Selected` always uses picks; `Random` always draws
/// `config.max_to_generate` independent combinations (duplicates across draws
/// are expected, not filtered); `All`, or no explicit mode, enumerates the
/// Cartesian product unless `config.random_mode` redirects to random draws.
pub fn select_combinations<R: RngCore>(
    layers: &[Layer],
    config: &GeneratorConfig,
    mode: Option<GenerationMode>,
    rng: &mut R,
) -> Vec<Combination> {
    match mode {
        Some(GenerationMode::Selected) => vec![select_using_picks(layers)],
        Some(GenerationMode::Random) => repeat_random(layers, config.max_to_generate, rng),
        Some(GenerationMode::All) | None => {
            if config.random_mode {
                repeat_random(layers, config.max_to_generate, rng)
            } else {
                select_all(layers, config.max_to_generate)
            }
        }
    }
}

/// Build one combination for a live preview: picks-based when any image is
/// pinned anywhere, otherwise a single random draw.
pub fn select_preview<R: RngCore>(layers: &[Layer], rng: &mut R) -> Combination {
    let any_selected = layers
        .iter()
        .any(|layer| layer.images.iter().any(|image| image.selected));
    if any_selected {
        select_using_picks(layers)
    } else {
        select_random(layers, rng)
    }
}

fn repeat_random<R: RngCore>(layers: &[Layer], count: usize, rng: &mut R) -> Vec<Combination> {
    (0..count).map(|_| select_random(layers, rng)).collect()
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Draw a uniform index in `0..len`. `len` must be non-zero.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn RngCore, len: usize) -> usize {
    debug_assert!(len > 0, "rand_index requires a non-empty range");
    ((rand01(rng) * len as f32) as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::model::ImageItem;

    fn layer(name: &str, urls: &[&str]) -> Layer {
        Layer::new(name).with_images(
            urls.iter()
                .enumerate()
                .map(|(i, url)| ImageItem::new(i.to_string(), *url, *url))
                .collect(),
        )
    }

    fn two_layers() -> Vec<Layer> {
        vec![
            layer("Background", &["bg_a.png", "bg_b.png"]),
            layer("Body", &["body_a.png", "body_b.png", "body_c.png"]),
        ]
    }

    #[test]
    fn selected_mode_returns_single_picks_combination() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = GeneratorConfig::default();
        let combinations = select_combinations(
            &two_layers(),
            &config,
            Some(GenerationMode::Selected),
            &mut rng,
        );
        assert_eq!(combinations.len(), 1);
        // No pins anywhere, so picks falls back to first images.
        assert_eq!(combinations[0].get("Background"), Some("bg_a.png"));
        assert_eq!(combinations[0].get("Body"), Some("body_a.png"));
    }

    #[test]
    fn random_mode_draws_max_to_generate_combinations() {
        let mut rng = StdRng::seed_from_u64(2);
        let config = GeneratorConfig::default().with_max_to_generate(7);
        let combinations = select_combinations(
            &two_layers(),
            &config,
            Some(GenerationMode::Random),
            &mut rng,
        );
        assert_eq!(combinations.len(), 7);
        for combination in &combinations {
            assert_eq!(combination.len(), 2);
        }
    }

    #[test]
    fn all_mode_enumerates_when_random_mode_off() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = GeneratorConfig::default()
            .with_random_mode(false)
            .with_max_to_generate(100);
        let combinations =
            select_combinations(&two_layers(), &config, Some(GenerationMode::All), &mut rng);
        assert_eq!(combinations.len(), 6);
    }

    #[test]
    fn all_mode_defers_to_random_mode_flag() {
        let mut rng = StdRng::seed_from_u64(4);
        let config = GeneratorConfig::default()
            .with_random_mode(true)
            .with_max_to_generate(4);
        let combinations =
            select_combinations(&two_layers(), &config, Some(GenerationMode::All), &mut rng);
        assert_eq!(combinations.len(), 4);
    }

    #[test]
    fn missing_mode_falls_back_to_config() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = GeneratorConfig::default()
            .with_random_mode(false)
            .with_max_to_generate(4);
        let combinations = select_combinations(&two_layers(), &config, None, &mut rng);
        // Enumeration order is deterministic, truncated at the bound.
        assert_eq!(combinations.len(), 4);
        assert_eq!(combinations[0].get("Body"), Some("body_a.png"));
        assert_eq!(combinations[1].get("Body"), Some("body_b.png"));
    }

    #[test]
    fn preview_uses_picks_when_any_image_is_pinned() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut layers = two_layers();
        layers[1].images[2].selected = true;

        let combination = select_preview(&layers, &mut rng);
        assert_eq!(combination.get("Background"), Some("bg_a.png"));
        assert_eq!(combination.get("Body"), Some("body_c.png"));
    }

    #[test]
    fn preview_draws_randomly_without_pins() {
        let mut rng = StdRng::seed_from_u64(7);
        let layers = two_layers();
        let combination = select_preview(&layers, &mut rng);
        assert_eq!(combination.len(), 2);
        assert!(combination.get("Background").is_some());
        assert!(combination.get("Body").is_some());
    }

    #[test]
    fn rand_index_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..1000 {
            let ix = rand_index(&mut rng, 3);
            assert!(ix < 3);
        }
    }
}
