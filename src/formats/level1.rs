// Level 1 layouts: brightness temperatures, infrared and surface sensors

use super::schema::{Codec, Count, Item, Limit, Scalar, Schema};
use crate::core::kind::{BLB_MAGIC, BRT_MAGIC, IRT_MAGIC, MET_LEGACY_MAGIC, MET_MAGIC};
use crate::core::FileKind;
use crate::register_format;

pub const BRT: Schema = Schema {
    kind: FileKind::Brt,
    variant: None,
    magics: &[BRT_MAGIC],
    header: &[
        Item::count("n", Scalar::U32, Limit::Samples),
        Item::uint("time_ref"),
        Item::count("freq_count", Scalar::U32, Limit::Axis),
        Item::floats("frequencies", Count::Field("freq_count")),
        Item::floats("min", Count::Field("freq_count")),
        Item::floats("max", Count::Field("freq_count")),
    ],
    sample: &[
        Item::time("time", Scalar::I32),
        Item::rain_flag("rain_flag"),
        Item::floats("tb", Count::Field("freq_count")),
        Item::angle("angle"),
    ],
    sample_count: "n",
    time_field: "time",
    axis: Some("frequencies"),
};

/// Boundary-layer elevation scans. Each sample holds one row per frequency
/// with one column per scan angle plus the zenith observation.
pub const BLB: Schema = Schema {
    kind: FileKind::Blb,
    variant: None,
    magics: &[BLB_MAGIC],
    header: &[
        Item::count("n", Scalar::U32, Limit::Samples),
        Item::count("freq_count", Scalar::U32, Limit::Axis),
        Item::floats("min", Count::Field("freq_count")),
        Item::floats("max", Count::Field("freq_count")),
        Item::uint("time_ref"),
        Item::floats("frequencies", Count::Field("freq_count")),
        Item::count("angle_count", Scalar::U32, Limit::Axis),
        Item::angles("angles", Count::Field("angle_count")),
    ],
    sample: &[
        Item::time("time", Scalar::I32),
        Item::coded("scan_mode", Scalar::U8, Codec::ScanMode),
        Item::matrix(
            "tb",
            Count::Field("freq_count"),
            Count::FieldPlus("angle_count", 1),
        ),
    ],
    sample_count: "n",
    time_field: "time",
    axis: Some("angles"),
};

/// Infrared radiometer. Files list every wavelength in the header but
/// carry a single temperature per sample.
pub const IRT: Schema = Schema {
    kind: FileKind::Irt,
    variant: None,
    magics: &[IRT_MAGIC],
    header: &[
        Item::count("n", Scalar::U32, Limit::Samples),
        Item::float("min"),
        Item::float("max"),
        Item::uint("time_ref"),
        Item::count("wavelength_count", Scalar::U32, Limit::Axis),
        Item::floats("wavelengths", Count::Field("wavelength_count")),
    ],
    sample: &[
        Item::time("time", Scalar::I32),
        Item::rain_flag("rain_flag"),
        Item::float("irt"),
        Item::angle("angle"),
    ],
    sample_count: "n",
    time_field: "time",
    axis: Some("wavelengths"),
};

const MET_BOUNDS: [Item; 7] = [
    Item::float("min_pressure"),
    Item::float("max_pressure"),
    Item::float("min_temperature"),
    Item::float("max_temperature"),
    Item::float("min_humidity"),
    Item::float("max_humidity"),
    Item::uint("time_ref"),
];

const MET_SAMPLE: &[Item] = &[
    Item::time("time", Scalar::U32),
    Item::rain_flag("rain_flag"),
    Item::float("pressure"),
    Item::float("temperature"),
    Item::float("humidity"),
];

/// MET files written before the additional-sensor byte was introduced
pub const MET_LEGACY: Schema = Schema {
    kind: FileKind::Met,
    variant: Some("legacy"),
    magics: &[MET_LEGACY_MAGIC],
    header: &[
        Item::count("n", Scalar::U32, Limit::Samples),
        MET_BOUNDS[0],
        MET_BOUNDS[1],
        MET_BOUNDS[2],
        MET_BOUNDS[3],
        MET_BOUNDS[4],
        MET_BOUNDS[5],
        MET_BOUNDS[6],
    ],
    sample: MET_SAMPLE,
    sample_count: "n",
    time_field: "time",
    axis: None,
};

/// Current MET layout. The sensor byte flags additional sensors whose
/// readings are not part of the per-sample record decoded here.
pub const MET: Schema = Schema {
    kind: FileKind::Met,
    variant: None,
    magics: &[MET_MAGIC],
    header: &[
        Item::count("n", Scalar::U32, Limit::Samples),
        Item::byte("sensors"),
        MET_BOUNDS[0],
        MET_BOUNDS[1],
        MET_BOUNDS[2],
        MET_BOUNDS[3],
        MET_BOUNDS[4],
        MET_BOUNDS[5],
        MET_BOUNDS[6],
    ],
    sample: MET_SAMPLE,
    sample_count: "n",
    time_field: "time",
    axis: None,
};

register_format!(BRT);
register_format!(BLB);
register_format!(IRT);
register_format!(MET_LEGACY);
register_format!(MET);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecs::ScanPattern;
    use crate::core::Value;
    use crate::decoder::{decode, DecodeError};
    use crate::formats::fixtures::{init_tracing, FileBuilder};

    fn met_file(magic: u32, samples: &[(u32, f32, f32, f32)]) -> Vec<u8> {
        let mut b = FileBuilder::new(magic).u32(samples.len() as u32);
        if magic == MET_MAGIC {
            b = b.u8(0b0000_0011);
        }
        b = b
            .f32s(&[900.0, 1100.0, 240.0, 320.0, 0.0, 100.0])
            .u32(1);
        for (t, p, temp, rh) in samples {
            b = b.u32(*t).u8(0).f32(*p).f32(*temp).f32(*rh);
        }
        b.build()
    }

    #[test]
    fn test_met_legacy_and_current() {
        init_tracing();
        let samples = [(600, 1013.2, 288.1, 61.0), (660, 1013.0, 288.3, 60.5)];

        let legacy = decode(&met_file(MET_LEGACY_MAGIC, &samples)).unwrap();
        let current = decode(&met_file(MET_MAGIC, &samples)).unwrap();

        assert_eq!(legacy.kind(), FileKind::Met);
        assert_eq!(current.kind(), FileKind::Met);
        assert!(legacy.header().get("sensors").is_none());
        assert_eq!(
            current.header().get("sensors").and_then(|v| v.as_i64()),
            Some(3)
        );
        assert_eq!(legacy.columns(), current.columns());
        assert_eq!(legacy.times(), current.times());
        assert_eq!(
            legacy.column("pressure").unwrap().f32_values(),
            vec![Some(1013.2), Some(1013.0)]
        );
    }

    #[test]
    fn test_met_variant_mismatch_truncates() {
        // A legacy body behind the current magic is one byte short
        let mut data = met_file(MET_LEGACY_MAGIC, &[(0, 1.0, 2.0, 3.0)]);
        data[..4].copy_from_slice(&MET_MAGIC.to_le_bytes());
        assert!(matches!(
            decode(&data),
            Err(DecodeError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_blb_matrix_and_scan_mode() {
        init_tracing();
        // two frequencies, three scan angles -> 2 x 4 per sample
        let data = FileBuilder::new(BLB_MAGIC)
            .u32(1)
            .u32(2)
            .f32s(&[250.0, 250.0])
            .f32s(&[330.0, 330.0])
            .u32(1)
            .f32s(&[51.26, 58.0])
            .u32(3)
            .f32s(&[90.0, 1590.0, 267438.5])
            .i32(3600)
            .u8(0b1000_0010)
            .f32s(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0])
            .build();

        let ds = decode(&data).unwrap();
        let angles = ds.header().axis().and_then(|v| v.as_angles()).unwrap();
        assert_eq!(angles.len(), 3);
        assert_eq!(angles[1].zenith, 90.0);

        let mode = ds.value("scan_mode", 0).unwrap().as_scan_mode().unwrap();
        assert_eq!(mode.rain, 1);
        assert_eq!(mode.pattern(), Some(ScanPattern::AveragedQuadrants));

        let tb = ds.value("tb", 0).unwrap().as_matrix().unwrap();
        assert_eq!((tb.rows, tb.cols), (2, 4));
        assert_eq!(tb.row(1), Some(&[5.0, 6.0, 7.0, 8.0][..]));
    }

    #[test]
    fn test_irt_single_value_per_sample() {
        let data = FileBuilder::new(IRT_MAGIC)
            .u32(1)
            .f32(200.0)
            .f32(300.0)
            .u32(1)
            .u32(2)
            .f32s(&[10.5, 11.1])
            .i32(0)
            .u8(0)
            .f32(255.5)
            .f32(90.0)
            .build();

        let ds = decode(&data).unwrap();
        assert_eq!(ds.value("irt", 0), Some(&Value::F32(255.5)));
        assert_eq!(ds.header().bounds(), Some((200.0, 300.0)));
    }

    #[test]
    fn test_brt_field_order() {
        init_tracing();
        // n, time_ref, freq_count, then frequencies, min and max per channel
        let data = FileBuilder::new(BRT_MAGIC)
            .u32(1)
            .u32(1)
            .u32(2)
            .f32s(&[22.24, 23.04])
            .f32s(&[2.7, 2.8])
            .f32s(&[330.0, 331.0])
            .i32(558_100_800)
            .u8(0)
            .f32s(&[280.5, 281.5])
            .f32(1267438.5)
            .build();
        let ds = decode(&data).unwrap();
        let header = ds.header();

        assert_eq!(ds.kind(), FileKind::Brt);
        assert_eq!(header.time_reference, Some(crate::core::TimeReference::Utc));
        assert_eq!(
            header.axis().and_then(Value::as_f32s),
            Some(&[22.24, 23.04][..])
        );
        assert_eq!(
            header.get("min").and_then(Value::as_f32s),
            Some(&[2.7, 2.8][..])
        );
        assert_eq!(
            header.get("max").and_then(Value::as_f32s),
            Some(&[330.0, 331.0][..])
        );
        assert_eq!(ds.times()[0].to_rfc3339(), "2018-09-08T12:00:00+00:00");
        assert_eq!(
            ds.value("tb", 0).and_then(Value::as_f32s),
            Some(&[280.5, 281.5][..])
        );

        let angle = ds.value("angle", 0).unwrap().as_angle().unwrap();
        assert!((angle.zenith - 138.5).abs() < 1e-4);
        assert!((angle.azimuth - 267.4).abs() < 1e-4);
    }
}
