// Sanity bounds applied to counts read from file headers

/// Largest sample count accepted from a header. A year of one-second
/// samples is well below this.
pub const MAX_SAMPLE_COUNT: usize = 4_194_304;

/// Largest frequency, altitude, angle or wavelength axis accepted
pub const MAX_AXIS_LEN: usize = 65_536;

/// Largest channel count of a single receiver in a calibration history entry
pub const MAX_RECEIVER_CHANNELS: usize = 32;

/// Number of stability indices carried by STA files
pub const STABILITY_INDEX_COUNT: usize = 6;

/// Ambient target temperature sensors reported in housekeeping files
pub const AMBIENT_SENSOR_COUNT: usize = 4;
