//! # Synthetic Batch Generator
//!
//! Produces the batch of sales inserted on each run.
//!
//! ## Sampling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  for each of N records (independently, uniformly):                      │
//! │                                                                         │
//! │    product  ◄── PRODUCTS      ["Product A" .. "Product E"]             │
//! │    quantity ◄── 1..=10                                                  │
//! │    price    ◄── PRICE_POINTS  [15.0, 20.0, 25.0, 30.0, 35.0]           │
//! │                                                                         │
//! │  seed = Some(s) → StdRng::seed_from_u64(s)   (reproducible)            │
//! │  seed = None    → StdRng::from_entropy()     (normal runs)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::types::NewSale;
use crate::{DEFAULT_BATCH_SIZE, MAX_QUANTITY, MIN_QUANTITY, PRICE_POINTS, PRODUCTS};

// =============================================================================
// Configuration
// =============================================================================

/// Generator configuration.
///
/// ## Example
/// ```rust
/// use salesplot_core::GeneratorConfig;
///
/// let config = GeneratorConfig::default().batch_size(5).seed(42);
/// assert_eq!(config.batch_size, 5);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Records per batch. Default: 50
    pub batch_size: usize,

    /// Fixed seed for reproducible batches. Default: None (OS entropy)
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Sets the batch size.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets a fixed seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

// =============================================================================
// Generator
// =============================================================================

/// Draws synthetic sales from the closed vocabulary.
#[derive(Debug)]
pub struct SalesGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl SalesGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        SalesGenerator { config, rng }
    }

    /// Generates one configured batch.
    pub fn generate(&mut self) -> Vec<NewSale> {
        self.generate_n(self.config.batch_size)
    }

    /// Generates exactly `count` records.
    pub fn generate_n(&mut self, count: usize) -> Vec<NewSale> {
        let batch: Vec<NewSale> = (0..count).map(|_| self.next_sale()).collect();

        debug!(
            count = batch.len(),
            seeded = self.config.seed.is_some(),
            "Generated sales batch"
        );

        batch
    }

    /// Draws a single record.
    pub fn next_sale(&mut self) -> NewSale {
        let product = PRODUCTS[self.rng.gen_range(0..PRODUCTS.len())];
        let quantity = self.rng.gen_range(MIN_QUANTITY..=MAX_QUANTITY);
        let price = PRICE_POINTS[self.rng.gen_range(0..PRICE_POINTS.len())];

        NewSale::new(product, quantity, price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_new_sale;

    #[test]
    fn test_default_batch_size() {
        let mut generator = SalesGenerator::new(GeneratorConfig::default());
        assert_eq!(generator.generate().len(), DEFAULT_BATCH_SIZE);
    }

    #[test]
    fn test_generated_fields_stay_in_vocabulary() {
        let mut generator = SalesGenerator::new(GeneratorConfig::default().seed(1));

        for sale in generator.generate_n(1_000) {
            assert!((MIN_QUANTITY..=MAX_QUANTITY).contains(&sale.quantity));
            assert!(PRICE_POINTS.contains(&sale.price));
            assert!(PRODUCTS.contains(&sale.product.as_str()));
            assert!(validate_new_sale(&sale).is_ok());
        }
    }

    #[test]
    fn test_same_seed_same_batch() {
        let config = GeneratorConfig::default().batch_size(20).seed(42);

        let first = SalesGenerator::new(config).generate();
        let second = SalesGenerator::new(config).generate();

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = SalesGenerator::new(GeneratorConfig::default().seed(1)).generate();
        let second = SalesGenerator::new(GeneratorConfig::default().seed(2)).generate();

        assert_ne!(first, second);
    }

    #[test]
    fn test_zero_batch_is_empty() {
        let mut generator = SalesGenerator::new(GeneratorConfig::default().batch_size(0));
        assert!(generator.generate().is_empty());
    }

    #[test]
    fn test_large_sample_covers_vocabulary() {
        let mut generator = SalesGenerator::new(GeneratorConfig::default().seed(99));
        let batch = generator.generate_n(2_000);

        for product in PRODUCTS {
            assert!(batch.iter().any(|s| s.product == product), "{product} never drawn");
        }
        for price in PRICE_POINTS {
            assert!(batch.iter().any(|s| s.price == price), "{price} never drawn");
        }
        assert!(batch.iter().any(|s| s.quantity == MIN_QUANTITY));
        assert!(batch.iter().any(|s| s.quantity == MAX_QUANTITY));
    }
}
