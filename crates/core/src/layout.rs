//! Random turbine-layout generation.
//!
//! Utility for producing synthetic farm layouts to exercise the wake
//! models: uniformly scattered turbine positions with a guaranteed minimum
//! spacing, confined to a disc. Rejection sampling: oversample a unit
//! square, drop near-duplicates, rescale the cloud so its tightest pair
//! sits exactly at the requested spacing, then keep the points within the
//! radius of the cloud's centroid. Rounds that come up short carry their
//! survivors into the next attempt.

use nalgebra::Vector2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{WakeError, WakeResult};

/// Points packed tighter than this (pre-scale, in the unit square) count as
/// duplicates and are discarded.
const DUPLICATE_EPS: f64 = 1e-2;
/// Fresh samples drawn per requested turbine each round.
const OVERSAMPLE: usize = 20;
/// Sampling rounds before giving up.
const MAX_ROUNDS: usize = 32;

/// Parameters of a random layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Number of turbine positions to generate.
    pub turbines: usize,
    /// Maximum distance of any turbine from the layout centroid.
    pub max_radius: f64,
    /// Minimum spacing between any two turbines.
    pub min_distance: f64,
}

impl LayoutConfig {
    fn validate(&self) -> WakeResult<()> {
        if self.turbines == 0 {
            return Err(WakeError::InvalidConfig("layout needs at least one turbine"));
        }
        if !(self.max_radius.is_finite() && self.max_radius > 0.0) {
            return Err(WakeError::InvalidConfig("layout radius must be finite and positive"));
        }
        if !(self.min_distance.is_finite() && self.min_distance > 0.0) {
            return Err(WakeError::InvalidConfig("layout spacing must be finite and positive"));
        }
        Ok(())
    }
}

/// Distance from each point to its nearest neighbor.
pub fn pairwise_min_distance(points: &[Vector2<f64>]) -> Vec<f64> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            points
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, q)| (p - q).norm())
                .fold(f64::INFINITY, f64::min)
        })
        .collect()
}

/// Generates `config.turbines` positions with the configured spacing and
/// extent, using the supplied random source (seed it for reproducibility).
///
/// # Errors
///
/// Returns [`WakeError::InvalidConfig`] for a malformed configuration and
/// [`WakeError::LayoutExhausted`] when the spacing/radius combination is
/// too tight to place the requested count within the attempt bound.
pub fn generate_random_layout<R: Rng + ?Sized>(
    config: &LayoutConfig,
    rng: &mut R,
) -> WakeResult<Vec<Vector2<f64>>> {
    config.validate()?;

    let mut carried: Vec<Vector2<f64>> = Vec::new();
    for round in 0..MAX_ROUNDS {
        let mut points: Vec<Vector2<f64>> = (0..OVERSAMPLE * config.turbines)
            .map(|_| Vector2::new(rng.random::<f64>(), rng.random::<f64>()))
            .collect();
        points.extend(carried.iter().copied());

        let nearest = pairwise_min_distance(&points);
        let mut points: Vec<Vector2<f64>> = points
            .into_iter()
            .zip(nearest)
            .filter(|&(_, d)| d > DUPLICATE_EPS)
            .map(|(p, _)| p)
            .collect();
        if points.len() < 2 {
            continue;
        }

        // Rescale so the tightest remaining pair sits at the spacing bound;
        // dropping points afterwards can only widen spacings.
        let tightest = pairwise_min_distance(&points)
            .into_iter()
            .fold(f64::INFINITY, f64::min);
        if !tightest.is_finite() || tightest <= 0.0 {
            continue;
        }
        let scale = config.min_distance / tightest;
        for p in &mut points {
            *p *= scale;
        }

        let centroid =
            points.iter().fold(Vector2::zeros(), |acc, p| acc + p) / points.len() as f64;
        let mut kept: Vec<Vector2<f64>> = points
            .into_iter()
            .filter(|p| (p - centroid).norm() < config.max_radius)
            .collect();

        if kept.len() >= config.turbines {
            kept.truncate(config.turbines);
            debug!(round, placed = kept.len(), "random layout generated");
            return Ok(kept);
        }
        carried = kept;
    }

    Err(WakeError::LayoutExhausted { requested: config.turbines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CONFIG: LayoutConfig =
        LayoutConfig { turbines: 10, max_radius: 4000.0, min_distance: 100.0 };

    #[test]
    fn generates_the_requested_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let layout = generate_random_layout(&CONFIG, &mut rng).unwrap();
        assert_eq!(layout.len(), CONFIG.turbines);
    }

    #[test]
    fn respects_the_minimum_spacing() {
        let mut rng = StdRng::seed_from_u64(11);
        let layout = generate_random_layout(&CONFIG, &mut rng).unwrap();
        let nearest = pairwise_min_distance(&layout);
        for d in nearest {
            assert!(d >= CONFIG.min_distance * (1.0 - 1e-9), "spacing {d} below the bound");
        }
    }

    #[test]
    fn stays_within_the_radius() {
        let mut rng = StdRng::seed_from_u64(13);
        let layout = generate_random_layout(&CONFIG, &mut rng).unwrap();
        // Every kept point was within max_radius of a common centroid, so
        // no pair can be farther apart than the disc diameter.
        for (i, p) in layout.iter().enumerate() {
            for q in &layout[i + 1..] {
                assert!((p - q).norm() < 2.0 * CONFIG.max_radius);
            }
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_random_layout(&CONFIG, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_random_layout(&CONFIG, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_malformed_configs() {
        let mut rng = StdRng::seed_from_u64(1);
        for config in [
            LayoutConfig { turbines: 0, ..CONFIG },
            LayoutConfig { max_radius: 0.0, ..CONFIG },
            LayoutConfig { min_distance: -1.0, ..CONFIG },
        ] {
            assert!(matches!(
                generate_random_layout(&config, &mut rng),
                Err(WakeError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn impossible_packing_reports_exhaustion() {
        // 50 turbines spaced 1 km apart cannot fit in a 1 km disc.
        let config = LayoutConfig { turbines: 50, max_radius: 1000.0, min_distance: 1000.0 };
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            generate_random_layout(&config, &mut rng),
            Err(WakeError::LayoutExhausted { requested: 50 })
        );
    }

    #[test]
    fn nearest_neighbor_distances_are_symmetric_for_a_pair() {
        let points = vec![Vector2::new(0.0, 0.0), Vector2::new(3.0, 4.0)];
        assert_eq!(pairwise_min_distance(&points), vec![5.0, 5.0]);
    }
}
