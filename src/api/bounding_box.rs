use crate::api::geo_point::GeoPoint;
use crate::core::constants::MIN_PARALLEL_RADIUS;
use crate::core::geodesy::{deg2rad, earth_radius, rad2deg};
use crate::util::error::{GeoTileError, Result};
use geo_types::{Polygon, Rect, coord};
use serde::Serialize;

/// Output format for bounding box geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

/// A latitude/longitude rectangle around a center point.
///
/// Built once and never mutated. `min.latitude <= max.latitude` always holds;
/// the longitude extent is not wrapped at the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    min: GeoPoint,
    max: GeoPoint,
    center: GeoPoint,
}

impl BoundingBox {
    pub fn builder() -> BoundingBoxBuilder {
        BoundingBoxBuilder::new()
    }

    /// Builds a square box of `side_length_km` around `center` on the WGS-84 ellipsoid.
    ///
    /// The east-west half extent divides by `radius * cos(longitude)`. This
    /// matches the boxes produced by the heightmap data set tooling and is
    /// kept for compatibility, even though a parallel's radius follows the
    /// latitude. Fails with [`GeoTileError::DegenerateParallel`] where that
    /// radius vanishes (longitude near ±90°).
    ///
    /// # Example
    /// ```
    /// use geotile_rs::{BoundingBox, GeoPoint};
    ///
    /// # fn main() -> Result<(), geotile_rs::GeoTileError> {
    /// let bbox = BoundingBox::from_center(GeoPoint::new(51.058499, 13.744305), 10.0)?;
    /// assert!(bbox.min().latitude < 51.058499 && 51.058499 < bbox.max().latitude);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_center(center: GeoPoint, side_length_km: f64) -> Result<Self> {
        let center = GeoPoint::try_new(center.latitude, center.longitude)?;
        if !side_length_km.is_finite() || side_length_km <= 0.0 {
            return Err(GeoTileError::InvalidSideLength(side_length_km));
        }

        let lat_rad = deg2rad(center.latitude);
        let lon_rad = deg2rad(center.longitude);
        let half_side = 1000.0 * side_length_km / 2.0;

        let radius = earth_radius(lat_rad);
        let parallel_radius = radius * lon_rad.cos();
        if parallel_radius.abs() < MIN_PARALLEL_RADIUS {
            return Err(GeoTileError::DegenerateParallel {
                latitude: center.latitude,
                longitude: center.longitude,
            });
        }

        let lat_min = lat_rad - half_side / radius;
        let lat_max = lat_rad + half_side / radius;
        let lon_min = lon_rad - half_side / parallel_radius;
        let lon_max = lon_rad + half_side / parallel_radius;

        let bbox = Self {
            min: GeoPoint::new(rad2deg(lat_min), rad2deg(lon_min)),
            max: GeoPoint::new(rad2deg(lat_max), rad2deg(lon_max)),
            center,
        };
        tracing::trace!(%center, side_length_km, min = %bbox.min, max = %bbox.max, "built bounding box");
        Ok(bbox)
    }

    /// Builds a box from explicit south-west and north-east corners.
    ///
    /// The center is the midpoint of the corners. `min.longitude` may exceed
    /// `max.longitude` for a box that crosses the antimeridian.
    pub fn from_corners(min: GeoPoint, max: GeoPoint) -> Result<Self> {
        let min = GeoPoint::try_new(min.latitude, min.longitude)?;
        let max = GeoPoint::try_new(max.latitude, max.longitude)?;
        if min.latitude > max.latitude {
            return Err(GeoTileError::InvertedLatitudes {
                min: min.latitude,
                max: max.latitude,
            });
        }

        let center = GeoPoint::new(
            (min.latitude + max.latitude) / 2.0,
            (min.longitude + max.longitude) / 2.0,
        );
        Ok(Self { min, max, center })
    }

    pub fn min(&self) -> GeoPoint {
        self.min
    }

    pub fn max(&self) -> GeoPoint {
        self.max
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn height_deg(&self) -> f64 {
        self.max.latitude - self.min.latitude
    }

    pub fn width_deg(&self) -> f64 {
        (self.max.longitude - self.min.longitude).abs()
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        let (west, east) = if self.min.longitude <= self.max.longitude {
            (self.min.longitude, self.max.longitude)
        } else {
            (self.max.longitude, self.min.longitude)
        };
        point.latitude >= self.min.latitude
            && point.latitude <= self.max.latitude
            && point.longitude >= west
            && point.longitude <= east
    }

    /// Formats as `"minLon,minLat,maxLon,maxLat"`, the order heightmap export services take.
    pub fn export_box_param(&self) -> String {
        format!("{},{}", self.min.lon_lat_string(), self.max.lon_lat_string())
    }

    /// The box as a `geo_types::Rect` with x = longitude, y = latitude.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min.longitude, y: self.min.latitude },
            coord! { x: self.max.longitude, y: self.max.latitude },
        )
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }

    pub fn to_geometry_string(&self, format: GeometryFormat) -> String {
        let polygon = self.to_polygon();
        match format {
            GeometryFormat::Wkt => polygon_to_wkt(&polygon),
            GeometryFormat::GeoJson => polygon_to_geojson(&polygon),
        }
    }
}

fn polygon_to_wkt(polygon: &Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

fn polygon_to_geojson(polygon: &Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

#[derive(Debug, Default)]
pub struct BoundingBoxBuilder {
    center: Option<GeoPoint>,
    side_length_km: Option<f64>,
}

impl BoundingBoxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(mut self, center: GeoPoint) -> Self {
        self.center = Some(center);
        self
    }

    pub fn lat_lon(mut self, latitude: f64, longitude: f64) -> Self {
        self.center = Some(GeoPoint::new(latitude, longitude));
        self
    }

    pub fn side_length_km(mut self, side_length_km: f64) -> Self {
        self.side_length_km = Some(side_length_km);
        self
    }

    pub fn build(self) -> Result<BoundingBox> {
        let center = self.center.ok_or(GeoTileError::MissingField("center"))?;
        let side_length_km = self
            .side_length_km
            .ok_or(GeoTileError::MissingField("side_length_km"))?;

        BoundingBox::from_center(center, side_length_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::WGS84_A;
    use approx::assert_abs_diff_eq;

    const DRESDEN: GeoPoint = GeoPoint::new(51.058499, 13.744305);

    #[test]
    fn test_dresden_box() -> Result<()> {
        let bbox = BoundingBox::from_center(DRESDEN, 10.0)?;

        assert_abs_diff_eq!(bbox.min().latitude, 51.01349225172922, epsilon = 1e-9);
        assert_abs_diff_eq!(bbox.max().latitude, 51.10350574827077, epsilon = 1e-9);
        assert_abs_diff_eq!(bbox.min().longitude, 13.697971524639845, epsilon = 1e-9);
        assert_abs_diff_eq!(bbox.max().longitude, 13.790638475360158, epsilon = 1e-9);
        assert_eq!(bbox.center(), DRESDEN);
        Ok(())
    }

    #[test]
    fn test_north_south_extent_matches_side_length() -> Result<()> {
        let bbox = BoundingBox::from_center(DRESDEN, 10.0)?;
        let radius = earth_radius(deg2rad(DRESDEN.latitude));
        let extent_m = deg2rad(bbox.height_deg()) * radius;

        assert_abs_diff_eq!(extent_m, 10_000.0, epsilon = 1e-6);
        Ok(())
    }

    fn haversine_m(a: GeoPoint, b: GeoPoint) -> f64 {
        let (lat1, lat2) = (deg2rad(a.latitude), deg2rad(b.latitude));
        let dlat = lat2 - lat1;
        let dlon = deg2rad(b.longitude - a.longitude);
        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * 6_371_008.8 * h.sqrt().asin()
    }

    #[test]
    fn test_dresden_diagonal_extent() -> Result<()> {
        let bbox = BoundingBox::from_center(DRESDEN, 10.0)?;

        // east-west is scaled by cos(longitude), so at 51N the box is ~6.5 km wide
        let west = GeoPoint::new(DRESDEN.latitude, bbox.min().longitude);
        let east = GeoPoint::new(DRESDEN.latitude, bbox.max().longitude);
        let width_m = haversine_m(west, east);
        assert!((6_300.0..6_700.0).contains(&width_m), "width {} m", width_m);

        let diagonal_m = haversine_m(bbox.min(), bbox.max());
        assert!((11_500.0..12_300.0).contains(&diagonal_m), "diagonal {} m", diagonal_m);
        Ok(())
    }

    #[test]
    fn test_center_strictly_inside() -> Result<()> {
        for &(lat, lon) in &[(0.0, 0.0), (-33.8688, 151.2093), (64.1466, -21.9426), (47.04, 7.95)] {
            let center = GeoPoint::new(lat, lon);
            let bbox = BoundingBox::from_center(center, 2.5)?;
            assert!(bbox.min().latitude < lat && lat < bbox.max().latitude);
            assert!(bbox.contains(&center));
        }
        Ok(())
    }

    #[test]
    fn test_equator_box_is_square_in_degrees() -> Result<()> {
        let bbox = BoundingBox::from_center(GeoPoint::new(0.0, 0.0), 10.0)?;
        let expected = rad2deg(5000.0 / WGS84_A);

        assert_abs_diff_eq!(bbox.max().latitude, expected, epsilon = 1e-12);
        assert_abs_diff_eq!(bbox.max().longitude, expected, epsilon = 1e-12);
        assert_abs_diff_eq!(bbox.width_deg(), bbox.height_deg(), epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_longitude_scaling_follows_longitude_cosine() -> Result<()> {
        // same latitude, different longitude: east-west extent changes
        let a = BoundingBox::from_center(GeoPoint::new(10.0, 0.0), 10.0)?;
        let b = BoundingBox::from_center(GeoPoint::new(10.0, 60.0), 10.0)?;

        assert_abs_diff_eq!(a.height_deg(), b.height_deg(), epsilon = 1e-12);
        assert_abs_diff_eq!(b.width_deg(), 2.0 * a.width_deg(), epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_degenerate_parallel() {
        let result = BoundingBox::from_center(GeoPoint::new(45.0, 90.0), 10.0);
        assert!(matches!(
            result,
            Err(GeoTileError::DegenerateParallel { .. })
        ));
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            BoundingBox::from_center(DRESDEN, 0.0),
            Err(GeoTileError::InvalidSideLength(0.0))
        );
        assert!(matches!(
            BoundingBox::from_center(DRESDEN, f64::NAN),
            Err(GeoTileError::InvalidSideLength(_))
        ));
        assert!(matches!(
            BoundingBox::from_center(GeoPoint::new(95.0, 0.0), 1.0),
            Err(GeoTileError::InvalidLatitude(_))
        ));
    }

    #[test]
    fn test_builder() -> Result<()> {
        let bbox = BoundingBox::builder()
            .center(DRESDEN)
            .side_length_km(10.0)
            .build()?;
        assert_eq!(bbox, BoundingBox::from_center(DRESDEN, 10.0)?);

        let bbox = BoundingBox::builder()
            .lat_lon(51.058499, 13.744305)
            .side_length_km(10.0)
            .build()?;
        assert_eq!(bbox.center(), DRESDEN);
        Ok(())
    }

    #[test]
    fn test_builder_missing_fields() {
        let result = BoundingBox::builder().side_length_km(10.0).build();
        assert_eq!(result, Err(GeoTileError::MissingField("center")));

        let result = BoundingBox::builder().center(DRESDEN).build();
        assert_eq!(result, Err(GeoTileError::MissingField("side_length_km")));
    }

    #[test]
    fn test_from_corners() -> Result<()> {
        let bbox = BoundingBox::from_corners(GeoPoint::new(10.0, 179.9), GeoPoint::new(10.1, -179.9))?;
        assert!(bbox.min().longitude > bbox.max().longitude);
        assert_abs_diff_eq!(bbox.center().latitude, 10.05, epsilon = 1e-12);

        let flipped = BoundingBox::from_corners(GeoPoint::new(11.0, 0.0), GeoPoint::new(10.0, 1.0));
        assert_eq!(
            flipped,
            Err(GeoTileError::InvertedLatitudes {
                min: 11.0,
                max: 10.0
            })
        );

        let bad = BoundingBox::from_corners(GeoPoint::new(-91.0, 0.0), GeoPoint::new(10.0, 1.0));
        assert_eq!(bad, Err(GeoTileError::InvalidLatitude(-91.0)));
        Ok(())
    }

    #[test]
    fn test_export_box_param() -> Result<()> {
        let bbox = BoundingBox::from_corners(GeoPoint::new(51.0, 13.5), GeoPoint::new(51.5, 14.25))?;
        assert_eq!(bbox.export_box_param(), "13.5,51,14.25,51.5");
        Ok(())
    }

    #[test]
    fn test_geometry_strings() -> Result<()> {
        let bbox = BoundingBox::from_center(DRESDEN, 10.0)?;

        let polygon = bbox.to_polygon();
        assert_eq!(polygon.exterior().coords().count(), 5);

        let wkt = bbox.to_geometry_string(GeometryFormat::Wkt);
        assert!(wkt.starts_with("POLYGON"));

        let geojson = bbox.to_geometry_string(GeometryFormat::GeoJson);
        assert!(geojson.contains("\"Polygon\""));
        Ok(())
    }
}
