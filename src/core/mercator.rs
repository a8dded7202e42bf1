use crate::core::constants::{DEFAULT_ZOOM_LEVELS, MAX_SIN_LATITUDE, TILE_SIZE};
use crate::core::geodesy::deg2rad;
use crate::util::coord::Coordinate;
use crate::util::error::{GeoTileError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Pixel coordinates at a specific zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Fractional tile column containing this pixel.
    pub fn tile_x(&self) -> f64 {
        self.x / TILE_SIZE as f64
    }

    /// Fractional tile row containing this pixel.
    pub fn tile_y(&self) -> f64 {
        self.y / TILE_SIZE as f64
    }
}

/// Pixel-space parameters of a single zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevelParams {
    /// Width (and height) of the whole world in pixels, `TILE_SIZE * 2^zoom`.
    pub tiles_per_side: f64,
    pub origin: PixelPoint,
    pub pixels_per_lon_degree: f64,
    pub pixels_per_lon_radian: f64,
}

impl ZoomLevelParams {
    pub fn new(zoom: u8) -> Self {
        let tiles_per_side = TILE_SIZE as f64 * 2f64.powi(zoom as i32);
        let origin = tiles_per_side / 2.0;

        Self {
            tiles_per_side,
            origin: PixelPoint::new(origin, origin),
            pixels_per_lon_degree: tiles_per_side / 360.0,
            pixels_per_lon_radian: tiles_per_side / (2.0 * PI),
        }
    }

    /// Web-Mercator forward projection to rounded pixel coordinates.
    ///
    /// Rounds half to even. `sin(latitude)` is clamped to ±0.9999 so the
    /// poles stay finite.
    pub fn project<C: Coordinate>(&self, point: &C) -> PixelPoint {
        let x = (self.origin.x + point.x() * self.pixels_per_lon_degree).round_ties_even();

        let siny = deg2rad(point.y())
            .sin()
            .clamp(-MAX_SIN_LATITUDE, MAX_SIN_LATITUDE);
        let y = (self.origin.y
            + 0.5 * ((1.0 + siny) / (1.0 - siny)).ln() * -self.pixels_per_lon_radian)
            .round_ties_even();

        PixelPoint::new(x, y)
    }
}

/// Precomputed per-zoom Web-Mercator parameters.
///
/// The table is built once in [`MercatorProjection::new`] and only read
/// afterwards, so one instance can be shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct MercatorProjection {
    levels: Vec<ZoomLevelParams>,
}

impl MercatorProjection {
    /// Builds the table for zoom levels `0..zoom_levels`.
    pub fn new(zoom_levels: u8) -> Self {
        let levels: Vec<ZoomLevelParams> = (0..zoom_levels).map(ZoomLevelParams::new).collect();
        tracing::trace!(zoom_levels, "built mercator zoom table");
        Self { levels }
    }

    /// Number of zoom levels in the table.
    pub fn zoom_levels(&self) -> u8 {
        self.levels.len() as u8
    }

    pub fn params(&self, zoom: u8) -> Result<&ZoomLevelParams> {
        self.levels
            .get(zoom as usize)
            .ok_or(GeoTileError::InvalidZoomLevel {
                zoom,
                levels: self.zoom_levels(),
            })
    }

    /// Width of the world in pixels at `zoom`; x-coordinates wrap by this amount.
    pub fn wrap_width(&self, zoom: u8) -> Result<f64> {
        Ok(self.params(zoom)?.tiles_per_side)
    }

    /// Projects a lon/lat coordinate to pixel space at `zoom`.
    ///
    /// Longitudes outside ±180 are projected as-is, without wrapping.
    ///
    /// # Example
    /// ```
    /// use geotile_rs::{GeoPoint, MercatorProjection};
    ///
    /// # fn main() -> Result<(), geotile_rs::GeoTileError> {
    /// let projection = MercatorProjection::default();
    /// let px = projection.project(&GeoPoint::new(0.0, 0.0), 0)?;
    /// assert_eq!((px.x, px.y), (128.0, 128.0));
    /// # Ok(())
    /// # }
    /// ```
    pub fn project<C: Coordinate>(&self, point: &C, zoom: u8) -> Result<PixelPoint> {
        if !point.y().is_finite() {
            return Err(GeoTileError::InvalidLatitude(point.y()));
        }
        if !point.x().is_finite() {
            return Err(GeoTileError::InvalidLongitude(point.x()));
        }
        Ok(self.params(zoom)?.project(point))
    }
}

impl Default for MercatorProjection {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_LEVELS)
    }
}
