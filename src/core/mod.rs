pub mod constants;
pub mod geodesy;
pub mod mercator;
pub mod slippy;

pub use constants::{
    DEFAULT_ZOOM_LEVELS, MAX_SIN_LATITUDE, MAX_TILE_ZOOM, TILE_SIZE, WGS84_A, WGS84_B,
};
pub use geodesy::{deg2rad, earth_radius, rad2deg};
pub use mercator::{MercatorProjection, PixelPoint, ZoomLevelParams};
pub use slippy::{lat_lon_to_tile_xy, tile_xy_to_lat_lon};
