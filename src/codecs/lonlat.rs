// GPS coordinate codec for (-)DDDMM.mmmm values
//
// Negative longitude is west of the 0-meridian, negative latitude is south
// of the equator.

/// Convert a degree-minute encoded coordinate to decimal degrees
pub fn decode(value: f64) -> f64 {
    let sign = if value < 0.0 { -1.0 } else { 1.0 };
    let magnitude = value.abs();

    let degree = (magnitude / 100.0).floor();
    let minute = (magnitude - degree * 100.0).floor();
    let second = (magnitude - (degree * 100.0 + minute)) * 60.0;

    sign * (degree + minute / 60.0 + second / 3600.0)
}
