use crate::api::geo_point::GeoPoint;
use crate::core::constants::MAX_TILE_ZOOM;
use crate::core::slippy::{lat_lon_to_tile_xy, tile_xy_to_lat_lon};
use crate::util::error::{GeoTileError, Result};
use geo_types::{Rect, coord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer slippy-map tile address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileIndex {
    pub x: i64,
    pub y: i64,
    pub zoom: u8,
}

impl TileIndex {
    pub fn new(x: i64, y: i64, zoom: u8) -> Self {
        Self { x, y, zoom }
    }

    /// Tile containing the given latitude/longitude at `zoom`.
    ///
    /// Zooms past [`MAX_TILE_ZOOM`] fail with [`GeoTileError::InvalidZoomLevel`].
    /// The south pole has no tile row and fails with [`GeoTileError::InvalidLatitude`].
    ///
    /// # Example
    /// ```
    /// use geotile_rs::TileIndex;
    ///
    /// # fn main() -> Result<(), geotile_rs::GeoTileError> {
    /// let tile = TileIndex::from_deg(51.058499, 13.744305, 10)?;
    /// assert_eq!((tile.x, tile.y), (551, 342));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_deg(lat: f64, lon: f64, zoom: u8) -> Result<Self> {
        if zoom > MAX_TILE_ZOOM {
            return Err(GeoTileError::InvalidZoomLevel {
                zoom,
                levels: MAX_TILE_ZOOM + 1,
            });
        }
        let point = GeoPoint::try_new(lat, lon)?;
        let (x, y) = lat_lon_to_tile_xy(point.latitude, point.longitude, zoom)
            .ok_or(GeoTileError::InvalidLatitude(point.latitude))?;
        Ok(Self::new(x, y, zoom))
    }

    pub fn from_point(point: &GeoPoint, zoom: u8) -> Result<Self> {
        Self::from_deg(point.latitude, point.longitude, zoom)
    }

    /// North-west corner of the tile.
    pub fn to_deg(&self) -> GeoPoint {
        let (lat, lon) = tile_xy_to_lat_lon(self.x, self.y, self.zoom);
        GeoPoint::new(lat, lon)
    }

    /// Whether `x` and `y` both lie in `0..2^zoom`.
    ///
    /// Always false past [`MAX_TILE_ZOOM`], where `2^zoom` overflows an `i64`.
    pub fn is_valid(&self) -> bool {
        if self.zoom > MAX_TILE_ZOOM {
            return false;
        }
        let n = 1i64 << self.zoom;
        (0..n).contains(&self.x) && (0..n).contains(&self.y)
    }

    /// Lon/lat extent of the tile (x = longitude, y = latitude).
    ///
    /// Indices at `i64::MAX` saturate, giving a zero-width edge.
    pub fn bounds(&self) -> Rect<f64> {
        let nw = self.to_deg();
        let se = Self::new(
            self.x.saturating_add(1),
            self.y.saturating_add(1),
            self.zoom,
        )
        .to_deg();
        Rect::new(
            coord! { x: nw.longitude, y: se.latitude },
            coord! { x: se.longitude, y: nw.latitude },
        )
    }
}

/// Formats as `"zoom/x/y"`.
impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Converts a latitude/longitude in degrees to the slippy tile containing it.
pub fn deg_to_tile(lat: f64, lon: f64, zoom: u8) -> Result<TileIndex> {
    TileIndex::from_deg(lat, lon, zoom)
}

/// Converts a slippy tile address to its north-west corner.
pub fn tile_to_deg(x: i64, y: i64, zoom: u8) -> GeoPoint {
    TileIndex::new(x, y, zoom).to_deg()
}
