use crate::api::bounding_box::BoundingBox;
use crate::api::geo_point::GeoPoint;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic stream of uniformly distributed points inside a bounding box.
#[derive(Debug, Clone)]
pub struct LocationSampler {
    min: GeoPoint,
    max: GeoPoint,
    remaining: usize,
    rng: ChaCha8Rng,
}

impl Iterator for LocationSampler {
    type Item = GeoPoint;

    fn next(&mut self) -> Option<GeoPoint> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let lat_t: f64 = self.rng.gen_range(0.0..1.0);
        let lon_t: f64 = self.rng.gen_range(0.0..1.0);
        Some(GeoPoint::new(
            self.min.latitude + lat_t * (self.max.latitude - self.min.latitude),
            self.min.longitude + lon_t * (self.max.longitude - self.min.longitude),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LocationSampler {}

/// Samples `count` locations inside `bounds`; the same seed yields the same points.
///
/// # Example
/// ```
/// use geotile_rs::{BoundingBox, GeoPoint, random_locations};
///
/// # fn main() -> Result<(), geotile_rs::GeoTileError> {
/// let region = BoundingBox::from_center(GeoPoint::new(47.040469, 7.952049), 500.0)?;
/// let picks: Vec<GeoPoint> = random_locations(&region, 3, 7).collect();
/// assert_eq!(picks.len(), 3);
/// # Ok(())
/// # }
/// ```
pub fn random_locations(bounds: &BoundingBox, count: usize, seed: u64) -> LocationSampler {
    tracing::debug!(count, seed, "sampling locations");
    LocationSampler {
        min: bounds.min(),
        max: bounds.max(),
        remaining: count,
        rng: ChaCha8Rng::seed_from_u64(seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::error::Result;

    fn region() -> Result<BoundingBox> {
        BoundingBox::from_center(GeoPoint::new(47.040469, 7.952049), 500.0)
    }

    #[test]
    fn test_points_inside_bounds() -> Result<()> {
        let bounds = region()?;
        let points: Vec<GeoPoint> = random_locations(&bounds, 500, 7).collect();

        assert_eq!(points.len(), 500);
        for p in &points {
            assert!(bounds.contains(p), "{} outside bounds", p);
        }
        Ok(())
    }

    #[test]
    fn test_same_seed_same_points() -> Result<()> {
        let bounds = region()?;
        let a: Vec<GeoPoint> = random_locations(&bounds, 20, 7).collect();
        let b: Vec<GeoPoint> = random_locations(&bounds, 20, 7).collect();
        let c: Vec<GeoPoint> = random_locations(&bounds, 20, 8).collect();

        assert_eq!(a, b);
        assert_ne!(a, c);
        Ok(())
    }

    #[test]
    fn test_exact_size() -> Result<()> {
        let bounds = region()?;
        let mut sampler = random_locations(&bounds, 3, 1);
        assert_eq!(sampler.len(), 3);
        sampler.next();
        assert_eq!(sampler.len(), 2);
        assert_eq!(random_locations(&bounds, 0, 1).count(), 0);
        Ok(())
    }
}
