use thiserror::Error;

/// Error type for geotile-rs operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoTileError {
    /// The zoom level is outside the precomputed projection table.
    #[error("Invalid zoom level: {zoom} (table covers 0..{levels})")]
    InvalidZoomLevel { zoom: u8, levels: u8 },
    /// The zoom search range is empty or exceeds the projection table.
    #[error("Invalid zoom range: {min}..{max}")]
    InvalidZoomRange { min: u8, max: u8 },
    /// Latitude is not finite or outside [-90, 90].
    #[error("Invalid latitude: {0}")]
    InvalidLatitude(f64),
    /// Longitude is not finite or outside [-180, 180].
    #[error("Invalid longitude: {0}")]
    InvalidLongitude(f64),
    /// Bounding box corners with the south corner north of the north corner.
    #[error("Inverted latitudes: min {min} is north of max {max}")]
    InvertedLatitudes { min: f64, max: f64 },
    /// Bounding box side length is not a finite positive number of kilometres.
    #[error("Invalid side length: {0} km")]
    InvalidSideLength(f64),
    /// The parallel radius collapsed to zero, so the east-west extent is unbounded.
    #[error("Degenerate parallel radius at ({latitude}, {longitude})")]
    DegenerateParallel { latitude: f64, longitude: f64 },
    /// A builder was finished without a required field.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    /// Output serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GeoTileError {
    fn from(e: serde_json::Error) -> Self {
        GeoTileError::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GeoTileError>;
