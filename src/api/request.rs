use crate::api::bounding_box::BoundingBox;
use crate::api::geo_point::GeoPoint;
use crate::api::zoom::ZoomResolver;
use crate::core::constants::TILE_SIZE;
use serde::{Deserialize, Serialize};

/// Center, zoom and image size handed to a static-map image download.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticMapRequest {
    pub center: GeoPoint,
    pub zoom: u8,
    /// Square image side in pixels.
    pub size: u32,
}

impl StaticMapRequest {
    /// One-tile static map covering `bbox`.
    pub fn for_bounding_box(bbox: &BoundingBox, resolver: &ZoomResolver) -> Self {
        Self {
            center: bbox.center(),
            zoom: resolver.resolve(bbox),
            size: TILE_SIZE,
        }
    }

    /// Query parameters in the form static map endpoints accept.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("center", self.center.to_string()),
            ("zoom", self.zoom.to_string()),
            ("size", format!("{}x{}", self.size, self.size)),
        ]
    }
}
