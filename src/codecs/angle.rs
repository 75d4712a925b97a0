// Combined zenith/azimuth angle codec
//
// Encoding used by the instrument: Ang = sign(El) * (|El| + 1000 * Az) for
// -90 <= El < 100 and 0 <= Az < 360. For El >= 100 the value 1,000,000 is
// added and El - 100 is used in the formula.

use serde::{Deserialize, Serialize};

/// Offset added to the encoded value when the elevation is 100 degrees or more
const HIGH_ELEVATION_OFFSET: f64 = 1_000_000.0;

/// Pointing direction of one sample, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    pub zenith: f64,
    pub azimuth: f64,
}

impl Angle {
    pub fn new(zenith: f64, azimuth: f64) -> Self {
        Self { zenith, azimuth }
    }
}

/// Decode a packed angle value into zenith and azimuth
pub fn decode(value: f64) -> Angle {
    if value / HIGH_ELEVATION_OFFSET > 1.0 {
        let azimuth = round_significant((value - HIGH_ELEVATION_OFFSET) / 1000.0, 4);
        let zenith = value - (HIGH_ELEVATION_OFFSET + azimuth * 1000.0) + 100.0;
        Angle { zenith, azimuth }
    } else if value < 100.0 {
        Angle {
            zenith: value,
            azimuth: 0.0,
        }
    } else {
        let hundreds = (value / 100.0).floor();
        let zenith = value - 100.0 * hundreds;
        let azimuth = (value - zenith) / 1000.0;
        Angle { zenith, azimuth }
    }
}

/// Round to a number of significant decimal digits
fn round_significant(value: f64, digits: i32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits - 1 - magnitude);
    (value * factor).round() / factor
}
