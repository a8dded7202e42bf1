use geo_types::Point;

/// Trait for types that can provide lon/lat coordinates.
///
/// Implemented for `(lon, lat)` tuples, `geo_types::Point<f64>` and [`GeoPoint`](crate::GeoPoint).
/// This allows functions to accept any of them.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (13.744305, 51.058499);
        assert_eq!(tuple.x(), 13.744305);
        assert_eq!(tuple.y(), 51.058499);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(13.744305, 51.058499);
        assert_eq!(Coordinate::x(&point), 13.744305);
        assert_eq!(Coordinate::y(&point), 51.058499);
    }
}
