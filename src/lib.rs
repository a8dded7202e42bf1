//! # geotile-rs
//!
//! Turns a center point and a side length into a WGS-84 bounding box, finds the
//! Web-Mercator zoom level at which that box fits a single 256px tile, and
//! converts between coordinates and slippy tile indices.
//!
//! There are currently three main entry points.
//!
//! ### 1. `BoundingBox` - Boxes on the WGS-84 Ellipsoid
//!
//! ```
//! use geotile_rs::{BoundingBox, GeoPoint};
//!
//! # fn main() -> Result<(), geotile_rs::GeoTileError> {
//! let bbox = BoundingBox::from_center(GeoPoint::new(51.058499, 13.744305), 10.0)?;
//! println!("{}", bbox.export_box_param());
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `ZoomResolver` - Static Map Zoom Levels
//!
//! ```
//! use geotile_rs::{BoundingBox, StaticMapRequest, ZoomResolver};
//!
//! # fn main() -> Result<(), geotile_rs::GeoTileError> {
//! let resolver = ZoomResolver::builder().min_zoom(0).max_zoom(18).build()?;
//! let bbox = BoundingBox::builder()
//!     .lat_lon(51.058499, 13.744305)
//!     .side_length_km(10.0)
//!     .build()?;
//!
//! let request = StaticMapRequest::for_bounding_box(&bbox, &resolver);
//! println!("center={} zoom={}", request.center, request.zoom);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `TileIndex` - Slippy Tiles
//!
//! ```
//! use geotile_rs::{deg_to_tile, tile_to_deg};
//!
//! # fn main() -> Result<(), geotile_rs::GeoTileError> {
//! let tile = deg_to_tile(51.058499, 13.744305, 10)?;
//! let corner = tile_to_deg(tile.x, tile.y, tile.zoom);
//! println!("{} starts at {}", tile, corner);
//! # Ok(())
//! # }
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use api::{
    BoundingBox, BoundingBoxBuilder, BoundingBoxesToZoom, GeoPoint, GeometryFormat,
    LocationSampler, StaticMapRequest, TileIndex, ZoomResolver, ZoomResolverBuilder,
    deg_to_tile, random_locations, tile_to_deg,
};
pub use crate::core::{
    DEFAULT_ZOOM_LEVELS, MAX_SIN_LATITUDE, MAX_TILE_ZOOM, MercatorProjection, PixelPoint,
    TILE_SIZE, WGS84_A, WGS84_B, ZoomLevelParams, deg2rad, earth_radius, rad2deg,
};
pub use util::{Coordinate, GeoTileError, Result};

pub use geo_types;
