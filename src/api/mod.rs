pub mod bounding_box;
pub mod geo_point;
pub mod request;
pub mod sampling;
pub mod tile;
pub mod zoom;

pub use bounding_box::{BoundingBox, BoundingBoxBuilder, GeometryFormat};
pub use geo_point::GeoPoint;
pub use request::StaticMapRequest;
pub use sampling::{LocationSampler, random_locations};
pub use tile::{TileIndex, deg_to_tile, tile_to_deg};
pub use zoom::{BoundingBoxesToZoom, ZoomResolver, ZoomResolverBuilder};
