/// Northern edge of the award grid in degrees latitude. Row 0 starts here.
pub const NORTH_LAT: f64 = 33.383;
pub const SOUTH_LAT: f64 = 29.426;
/// Western edge of the award grid in degrees longitude. Column 0 starts here.
pub const WEST_LNG: f64 = 34.245;
pub const EAST_LNG: f64 = 35.9682;
pub const ROW_COUNT: usize = 44;
pub const COL_COUNT: usize = 16;

/// Column letters. 'I' is absent because it reads as '1' on paper logs.
pub const COLUMN_ALPHABET: &[u8; 25] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Tolerance in degrees for on-edge tests while clipping.
pub const GEO_EPSILON: f64 = 1e-9;

/// Side length of the interior sample grid used when no cell corner is inside a district.
pub const DEFAULT_SAMPLE_RESOLUTION: usize = 5;

/// Number of districts the award rules claim. The published abbreviation list
/// has one fewer, so this is compared against the loaded store, never assumed.
pub const RULES_DISTRICT_COUNT: usize = 23;

/// Suffix used when a coordinate falls outside every district.
pub const NO_DISTRICT_SUFFIX: &str = "XX";

/// Codes handed to each task when resolving worked areas on the compute pool.
pub const DEFAULT_PARALLEL_CHUNK: usize = 64;
