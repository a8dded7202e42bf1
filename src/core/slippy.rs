use crate::core::geodesy::{deg2rad, rad2deg};
use std::f64::consts::PI;

/// Converts a latitude/longitude in degrees to slippy tile `(x, y)` at `zoom`.
///
/// Latitudes beyond the Mercator limit (~±85.0511°) give rows outside `0..2^zoom`.
/// Returns `None` when a row or column is not finite or does not fit an `i64`
/// (the south pole, where `tan + sec` cancels to zero).
pub fn lat_lon_to_tile_xy(lat: f64, lon: f64, zoom: u8) -> Option<(i64, i64)> {
    let lat_rad = deg2rad(lat);
    let n = 2f64.powi(zoom as i32);

    let x = ((lon + 180.0) / 360.0 * n).floor();
    let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n).floor();

    Some((to_index(x)?, to_index(y)?))
}

fn to_index(v: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the exclusive bound
    (v.is_finite() && (i64::MIN as f64..i64::MAX as f64).contains(&v)).then_some(v as i64)
}

/// Converts slippy tile `(x, y)` at `zoom` to the latitude/longitude of its north-west corner.
pub fn tile_xy_to_lat_lon(x: i64, y: i64, zoom: u8) -> (f64, f64) {
    let n = 2f64.powi(zoom as i32);

    let lon = x as f64 / n * 360.0 - 180.0;
    let lat = rad2deg((PI * (1.0 - 2.0 * y as f64 / n)).sinh().atan());

    (lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_zero_is_single_tile() {
        assert_eq!(lat_lon_to_tile_xy(51.058499, 13.744305, 0), Some((0, 0)));
        assert_eq!(lat_lon_to_tile_xy(-33.8688, 151.2093, 0), Some((0, 0)));
    }

    #[test]
    fn test_known_tiles() {
        assert_eq!(lat_lon_to_tile_xy(51.058499, 13.744305, 10), Some((551, 342)));
        assert_eq!(lat_lon_to_tile_xy(-33.8688, 151.2093, 12), Some((3768, 2457)));
        assert_eq!(lat_lon_to_tile_xy(0.0, 0.0, 1), Some((1, 1)));
    }

    #[test]
    fn test_tile_origin_corners() {
        let (lat, lon) = tile_xy_to_lat_lon(0, 0, 0);
        assert!((lon + 180.0).abs() < 1e-12);
        assert!((lat - 85.0511287798).abs() < 1e-9);

        let (lat, lon) = tile_xy_to_lat_lon(1, 1, 1);
        assert!(lat.abs() < 1e-12);
        assert!(lon.abs() < 1e-12);
    }

    #[test]
    fn test_beyond_mercator_limit_leaves_range() {
        let (_, y) = lat_lon_to_tile_xy(89.9, 0.0, 4).unwrap();
        assert!(y < 0);
        let (_, y) = lat_lon_to_tile_xy(-89.9, 0.0, 4).unwrap();
        assert!(y >= 16);
        let (_, y) = lat_lon_to_tile_xy(90.0, 0.0, 4).unwrap();
        assert_eq!(y, -89);
    }

    #[test]
    fn test_south_pole_has_no_row() {
        assert_eq!(lat_lon_to_tile_xy(-90.0, 0.0, 4), None);
        assert_eq!(lat_lon_to_tile_xy(-90.0, 0.0, 0), None);
    }

    #[test]
    fn test_row_past_i64_range() {
        assert_eq!(lat_lon_to_tile_xy(-89.99999999, 0.0, 62), None);
        assert!(lat_lon_to_tile_xy(51.058499, 13.744305, 62).is_some());
    }
}
