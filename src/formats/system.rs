// Instrument layouts: housekeeping, calibration history and raw voltages

use super::schema::{Codec, Count, Gate, Item, Limit, Scalar, Schema};
use crate::core::constants::{AMBIENT_SENSOR_COUNT, MAX_RECEIVER_CHANNELS};
use crate::core::kind::{ABSCAL_HIS_MAGIC, HKD_MAGIC, LV0_MAGIC};
use crate::core::{FileKind, SelectorBitmask};
use crate::register_format;

/// Housekeeping data. Which optional blocks each sample carries is fixed
/// for the whole file by the selector byte in the header.
pub const HKD: Schema = Schema {
    kind: FileKind::Hkd,
    variant: None,
    magics: &[HKD_MAGIC],
    header: &[
        Item::count("n", Scalar::U32, Limit::Samples),
        Item::uint("time_ref"),
        Item::Selector { name: "selector" },
    ],
    sample: &[
        Item::time("time", Scalar::U32),
        Item::coded("alarm", Scalar::I8, Codec::Raw),
        Item::gated(
            Gate::Selector(SelectorBitmask::GPS),
            &[
                Item::coded("longitude", Scalar::F32, Codec::Coordinate),
                Item::coded("latitude", Scalar::F32, Codec::Coordinate),
            ],
        ),
        Item::gated(
            Gate::Selector(SelectorBitmask::AMBIENT_TEMPERATURES),
            &[Item::floats(
                "ambient_temperature",
                Count::Fixed(AMBIENT_SENSOR_COUNT),
            )],
        ),
        Item::gated(
            Gate::Selector(SelectorBitmask::RECEIVER_STABILITY),
            &[Item::floats("receiver_stability", Count::Fixed(2))],
        ),
        Item::gated(
            Gate::Selector(SelectorBitmask::FLASH_MEMORY),
            &[Item::uint("flash_memory_free")],
        ),
        Item::gated(
            Gate::Selector(SelectorBitmask::QUALITY),
            &[Item::coded("quality", Scalar::U32, Codec::Quality)],
        ),
        Item::gated(
            Gate::Selector(SelectorBitmask::STATUS),
            &[Item::coded("status", Scalar::U32, Codec::Status)],
        ),
    ],
    sample_count: "n",
    time_field: "time",
    axis: None,
};

/// Absolute calibration history. Every entry records one calibration of
/// both receivers; channel counts are declared per entry.
pub const ABSCAL_HIS: Schema = Schema {
    kind: FileKind::AbsCalHis,
    variant: None,
    magics: &[ABSCAL_HIS_MAGIC],
    header: &[Item::count("n", Scalar::I32, Limit::Samples)],
    sample: &[
        Item::int("entry_length"),
        Item::int("instrument"),
        Item::int("r1_calibration_type"),
        Item::int("r2_calibration_type"),
        Item::time("r1_time", Scalar::I32),
        Item::time("r2_time", Scalar::I32),
        Item::float("r1_ambient_temperature"),
        Item::float("r2_ambient_temperature"),
        Item::float("r1_pressure"),
        Item::float("r2_pressure"),
        Item::float("r1_hot_load"),
        Item::float("r2_hot_load"),
        Item::float("r1_cold_load"),
        Item::float("r2_cold_load"),
        Item::Padding(20),
        Item::count(
            "r1_channel_count",
            Scalar::I32,
            Limit::Max(MAX_RECEIVER_CHANNELS),
        ),
        Item::floats("r1_frequencies", Count::Field("r1_channel_count")),
        Item::count(
            "r2_channel_count",
            Scalar::I32,
            Limit::Max(MAX_RECEIVER_CHANNELS),
        ),
        Item::floats("r2_frequencies", Count::Field("r2_channel_count")),
        Item::ints(
            "channel_flags",
            Count::Sum("r1_channel_count", "r2_channel_count"),
        ),
        Item::floats("gain", Count::Sum("r1_channel_count", "r2_channel_count")),
        Item::floats(
            "noise_temperature",
            Count::Sum("r1_channel_count", "r2_channel_count"),
        ),
        Item::floats(
            "system_noise",
            Count::Sum("r1_channel_count", "r2_channel_count"),
        ),
        Item::floats(
            "nonlinearity",
            Count::Sum("r1_channel_count", "r2_channel_count"),
        ),
    ],
    sample_count: "n",
    time_field: "r1_time",
    axis: None,
};

/// Raw detector voltages. Slave radiometer fields are present only when
/// the header names a slave instrument.
pub const LV0: Schema = Schema {
    kind: FileKind::Lv0,
    variant: None,
    magics: &[LV0_MAGIC],
    header: &[
        Item::count("n", Scalar::I32, Limit::Samples),
        Item::int("master_id"),
        Item::int("slave_id"),
        Item::int("time_ref"),
        Item::count("freq_count", Scalar::I32, Limit::Axis),
        Item::floats("frequencies", Count::Field("freq_count")),
        Item::count("ir_count", Scalar::I32, Limit::Axis),
        Item::floats("ir_wavelengths", Count::Field("ir_count")),
        Item::float("longitude"),
        Item::float("latitude"),
        Item::floats("nonlinearity", Count::Field("freq_count")),
        Item::floats("delta_t", Count::Field("freq_count")),
    ],
    sample: &[
        Item::time("time", Scalar::I32),
        Item::floats("detector_voltage", Count::Field("freq_count")),
        Item::float("elevation"),
        Item::float("azimuth"),
        Item::float("master_ambient_temperature"),
        Item::coded("master_status", Scalar::I32, Codec::Status),
        Item::gated(
            Gate::NonZero("slave_id"),
            &[
                Item::float("slave_ambient_temperature"),
                Item::coded("slave_status", Scalar::I32, Codec::Status),
            ],
        ),
        Item::floats("gain", Count::Field("freq_count")),
        Item::floats("system_noise", Count::Field("freq_count")),
        Item::floats("noise_diode", Count::Field("freq_count")),
        Item::float("environment_temperature"),
        Item::float("pressure"),
        Item::float("humidity"),
        Item::floats("ir_temperature", Count::Field("ir_count")),
    ],
    sample_count: "n",
    time_field: "time",
    axis: Some("frequencies"),
};

register_format!(HKD);
register_format!(ABSCAL_HIS);
register_format!(LV0);
