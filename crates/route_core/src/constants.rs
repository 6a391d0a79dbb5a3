/// Edge weight type
pub type Weight = f64;

/// Latitude of the first generated default location
pub const DEFAULT_LAT: f64 = 19.0760;
/// Longitude of the first generated default location
pub const DEFAULT_LON: f64 = 72.8777;
/// Offset in degrees between two generated default locations
pub const DEFAULT_STEP: f64 = 0.005;
