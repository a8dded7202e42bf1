use crate::core::constants::{WGS84_A, WGS84_B};
use std::f64::consts::PI;

/// Converts degrees to radians.
pub fn deg2rad(degrees: f64) -> f64 {
    PI * degrees / 180.0
}

/// Converts radians to degrees.
pub fn rad2deg(radians: f64) -> f64 {
    180.0 * radians / PI
}

/// Radius of the WGS-84 ellipsoid at a geodetic latitude, in metres.
///
/// `R(φ) = sqrt(((a²cosφ)² + (b²sinφ)²) / ((a cosφ)² + (b sinφ)²))`
pub fn earth_radius(latitude_rad: f64) -> f64 {
    let (sin, cos) = latitude_rad.sin_cos();

    let an = WGS84_A * WGS84_A * cos;
    let bn = WGS84_B * WGS84_B * sin;
    let ad = WGS84_A * cos;
    let bd = WGS84_B * sin;

    ((an * an + bn * bn) / (ad * ad + bd * bd)).sqrt()
}
