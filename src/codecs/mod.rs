// Stateless value codecs shared by the file layouts
//
// None of these hold state or keep references to decoded data.

pub mod angle;
pub mod epoch;
pub mod flags;
pub mod lonlat;
pub mod rainflag;

pub use angle::Angle;
pub use flags::{FlagWord, QUALITY_LAYOUT, STATUS_LAYOUT};
pub use rainflag::{RainFlag, ScanMode, ScanPattern};
