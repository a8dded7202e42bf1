/// WGS-84 semi-major axis in metres
pub const WGS84_A: f64 = 6378137.0;

/// WGS-84 semi-minor axis in metres
pub const WGS84_B: f64 = 6356752.3;

/// Side length of a square map tile in pixels
pub const TILE_SIZE: u32 = 256;

/// Number of zoom levels in the default projection table (0-17)
pub const DEFAULT_ZOOM_LEVELS: u8 = 18;

/// Clamp applied to sin(latitude) before the Mercator logarithm
pub const MAX_SIN_LATITUDE: f64 = 0.9999;

/// Smallest parallel radius (metres) accepted when building a bounding box
pub(crate) const MIN_PARALLEL_RADIUS: f64 = 1.0;

/// Deepest slippy zoom whose `2^zoom` tile columns fit an `i64` index
pub const MAX_TILE_ZOOM: u8 = 62;
