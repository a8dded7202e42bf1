use crate::api::bounding_box::BoundingBox;
use crate::core::constants::{DEFAULT_ZOOM_LEVELS, TILE_SIZE};
use crate::core::mercator::{MercatorProjection, PixelPoint, ZoomLevelParams};
use crate::util::error::{GeoTileError, Result};
use rayon::prelude::*;

/// Finds the finest zoom at which a bounding box fits inside one tile.
///
/// Holds a read-only [`MercatorProjection`] table, so a single resolver can
/// serve many boxes, including from several threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomResolver {
    projection: MercatorProjection,
    min_zoom: u8,
    max_zoom: u8,
}

impl ZoomResolver {
    /// Resolver over zoom levels `0..18`.
    pub fn new() -> Self {
        Self {
            projection: MercatorProjection::new(DEFAULT_ZOOM_LEVELS),
            min_zoom: 0,
            max_zoom: DEFAULT_ZOOM_LEVELS,
        }
    }

    pub fn builder() -> ZoomResolverBuilder {
        ZoomResolverBuilder::new()
    }

    pub fn projection(&self) -> &MercatorProjection {
        &self.projection
    }

    /// Lowest zoom returned, also the fallback when nothing fits.
    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    /// Exclusive upper bound of the search; the first candidate is `max_zoom - 1`.
    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    /// Resolves the zoom for `bbox` over the configured range.
    ///
    /// Never fails: when no level fits, the minimum zoom is returned.
    ///
    /// # Example
    /// ```
    /// use geotile_rs::{BoundingBox, GeoPoint, ZoomResolver};
    ///
    /// # fn main() -> Result<(), geotile_rs::GeoTileError> {
    /// let bbox = BoundingBox::from_center(GeoPoint::new(51.058499, 13.744305), 10.0)?;
    /// let zoom = ZoomResolver::new().resolve(&bbox);
    /// assert_eq!(zoom, 11);
    /// # Ok(())
    /// # }
    /// ```
    pub fn resolve(&self, bbox: &BoundingBox) -> u8 {
        self.scan(bbox, self.min_zoom, self.max_zoom)
    }

    /// Resolves the zoom for `bbox`, scanning from `max_zoom - 1` down to `min_zoom`.
    pub fn resolve_in_range(&self, bbox: &BoundingBox, min_zoom: u8, max_zoom: u8) -> Result<u8> {
        validate_range(min_zoom, max_zoom, self.projection.zoom_levels())?;
        Ok(self.scan(bbox, min_zoom, max_zoom))
    }

    /// Whether both projected corners of `bbox` lie within one tile at `zoom`.
    pub fn fits_at(&self, bbox: &BoundingBox, zoom: u8) -> Result<bool> {
        let params = self.projection.params(zoom)?;
        Ok(fits(params, bbox, zoom))
    }

    // Linear scan, not a binary search: the wrap correction makes fit
    // non-monotonic in zoom.
    fn scan(&self, bbox: &BoundingBox, min_zoom: u8, max_zoom: u8) -> u8 {
        for zoom in (min_zoom..max_zoom).rev() {
            let Ok(params) = self.projection.params(zoom) else {
                continue;
            };
            if fits(params, bbox, zoom) {
                tracing::debug!(zoom, center = %bbox.center(), "resolved zoom level");
                return zoom;
            }
        }

        tracing::debug!(
            zoom = min_zoom,
            center = %bbox.center(),
            "no zoom level fits, falling back to minimum"
        );
        min_zoom
    }
}

impl Default for ZoomResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn fits(params: &ZoomLevelParams, bbox: &BoundingBox, zoom: u8) -> bool {
    let bottom_left = params.project(&bbox.min());
    let top_right = params.project(&bbox.max());
    let bottom_left = unwrap_antimeridian(bottom_left, top_right, params.tiles_per_side);

    let dx = (top_right.x - bottom_left.x).abs();
    let dy = (top_right.y - bottom_left.y).abs();
    let tile = TILE_SIZE as f64;

    let fits = dx <= tile && dy <= tile;
    if !fits {
        tracing::trace!(zoom, dx, dy, "bounding box exceeds one tile");
    }
    fits
}

/// Moves the western corner one world-width left when it projects east of
/// the eastern corner, i.e. the box crosses the antimeridian.
fn unwrap_antimeridian(west: PixelPoint, east: PixelPoint, wrap_width: f64) -> PixelPoint {
    if west.x > east.x {
        tracing::trace!(west_x = west.x, east_x = east.x, wrap_width, "unwrapping antimeridian");
        PixelPoint::new(west.x - wrap_width, west.y)
    } else {
        west
    }
}

fn validate_range(min_zoom: u8, max_zoom: u8, levels: u8) -> Result<()> {
    if min_zoom >= max_zoom || max_zoom > levels {
        return Err(GeoTileError::InvalidZoomRange {
            min: min_zoom,
            max: max_zoom,
        });
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct ZoomResolverBuilder {
    zoom_levels: Option<u8>,
    min_zoom: Option<u8>,
    max_zoom: Option<u8>,
}

impl ZoomResolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the projection table (default 18).
    pub fn zoom_levels(mut self, zoom_levels: u8) -> Self {
        self.zoom_levels = Some(zoom_levels);
        self
    }

    pub fn min_zoom(mut self, min_zoom: u8) -> Self {
        self.min_zoom = Some(min_zoom);
        self
    }

    /// Exclusive upper bound of the search (defaults to the table size).
    pub fn max_zoom(mut self, max_zoom: u8) -> Self {
        self.max_zoom = Some(max_zoom);
        self
    }

    pub fn build(self) -> Result<ZoomResolver> {
        let zoom_levels = self.zoom_levels.unwrap_or(DEFAULT_ZOOM_LEVELS);
        let min_zoom = self.min_zoom.unwrap_or(0);
        let max_zoom = self.max_zoom.unwrap_or(zoom_levels);
        validate_range(min_zoom, max_zoom, zoom_levels)?;

        Ok(ZoomResolver {
            projection: MercatorProjection::new(zoom_levels),
            min_zoom,
            max_zoom,
        })
    }
}

/// Resolves zoom levels for collections of [`BoundingBox`]es.
///
/// Implemented for `[BoundingBox]` and `Vec<BoundingBox>`; boxes are resolved in parallel.
pub trait BoundingBoxesToZoom {
    fn resolve_zooms(&self, resolver: &ZoomResolver) -> Vec<u8>;
}

impl BoundingBoxesToZoom for [BoundingBox] {
    fn resolve_zooms(&self, resolver: &ZoomResolver) -> Vec<u8> {
        self.par_iter().map(|bbox| resolver.resolve(bbox)).collect()
    }
}

impl BoundingBoxesToZoom for Vec<BoundingBox> {
    fn resolve_zooms(&self, resolver: &ZoomResolver) -> Vec<u8> {
        self.as_slice().resolve_zooms(resolver)
    }
}
