// src/generator/batch.rs
// Generates several independent polygons, one engine per polygon.

use log::info;
use rayon::prelude::*;

use crate::config::GeneratorConfig;
use crate::error::BatchError;
use crate::generator::inflate_cut::{check_vertex_count, InflateCutGenerator};
use crate::polygon::validate;
use crate::polygon::GridPolygon;

/// Seed of polygon `index` in a batch started from `base`.
pub fn polygon_seed(base: u64, index: usize) -> u64 {
    base.wrapping_add(index as u64)
}

/// Resolves the configured base seed, drawing one when none is set.
pub fn base_seed(config: &GeneratorConfig) -> u64 {
    config.seed.unwrap_or_else(rand::random)
}

fn generate_one(
    base: u64,
    index: usize,
    n: usize,
    verify: bool,
) -> Result<GridPolygon, BatchError> {
    let polygon = InflateCutGenerator::new(polygon_seed(base, index)).generate(n)?;
    if verify {
        validate::verify_grid_polygon(polygon.vertices(), n)
            .map_err(|defect| BatchError::Defect { index, defect })?;
    }
    Ok(polygon)
}

/// Generates `count` polygons of `n` vertices each. The result depends only
/// on the seed, not on whether the batch ran in parallel.
pub fn generate_batch(
    count: usize,
    n: usize,
    base: u64,
    config: &GeneratorConfig,
) -> Result<Vec<GridPolygon>, BatchError> {
    check_vertex_count(n)?;
    info!(
        "generating {} polygon(s) with {} vertices (seed {}, parallel: {})",
        count, n, base, config.parallel
    );
    if config.parallel {
        (0..count)
            .into_par_iter()
            .map(|index| generate_one(base, index, n, config.verify))
            .collect()
    } else {
        (0..count)
            .map(|index| generate_one(base, index, n, config.verify))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;

    fn config(parallel: bool) -> GeneratorConfig {
        GeneratorConfig {
            seed: Some(17),
            parallel,
            verify: true,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let parallel = generate_batch(16, 32, 17, &config(true)).unwrap();
        let sequential = generate_batch(16, 32, 17, &config(false)).unwrap();
        assert_eq!(parallel, sequential);
        assert!(parallel.iter().all(|p| p.len() == 32));
    }

    #[test]
    fn test_batch_member_matches_single_engine() {
        let batch = generate_batch(3, 12, 100, &config(false)).unwrap();
        let single = InflateCutGenerator::new(polygon_seed(100, 2)).generate(12).unwrap();
        assert_eq!(batch[2], single);
    }

    #[test]
    fn test_invalid_count_rejected_before_work() {
        assert_eq!(
            generate_batch(5, 7, 0, &config(true)),
            Err(BatchError::Generation(GenerationError::InvalidVertexCount { requested: 7 }))
        );
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(generate_batch(0, 8, 0, &config(true)), Ok(vec![]));
    }

    #[test]
    fn test_configured_seed_is_used() {
        assert_eq!(base_seed(&config(true)), 17);
        assert_eq!(polygon_seed(u64::MAX, 1), 0);
    }
}
