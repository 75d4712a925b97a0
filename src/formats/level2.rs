// Level 2 layouts: retrieved products and profiles

use super::schema::{Count, Item, Limit, Scalar, Schema};
use crate::core::constants::STABILITY_INDEX_COUNT;
use crate::core::kind::{
    ATN_MAGIC, BLH_MAGIC, CBH_MAGIC, HPC_MAGIC, IWV_MAGIC, LPR_MAGIC, LWP_MAGIC, STA_MAGIC,
    TPB_MAGIC, TPC_MAGIC,
};
use crate::core::FileKind;
use crate::register_format;

/// Header shared by single-value products with a retrieval method
const PRODUCT_HEADER: &[Item] = &[
    Item::count("n", Scalar::U32, Limit::Samples),
    Item::float("min"),
    Item::float("max"),
    Item::uint("time_ref"),
    Item::uint("retrieval"),
];

/// Header shared by height profiles
const PROFILE_HEADER: &[Item] = &[
    Item::count("n", Scalar::U32, Limit::Samples),
    Item::float("min"),
    Item::float("max"),
    Item::uint("time_ref"),
    Item::uint("retrieval"),
    Item::count("altitude_count", Scalar::U32, Limit::Axis),
    Item::ints("altitudes", Count::Field("altitude_count")),
];

/// Header of products without a retrieval method
const HEIGHT_HEADER: &[Item] = &[
    Item::count("n", Scalar::I32, Limit::Samples),
    Item::float("min"),
    Item::float("max"),
    Item::int("time_ref"),
];

const fn product(kind: FileKind, magic: &'static [u32], sample: &'static [Item]) -> Schema {
    Schema {
        kind,
        variant: None,
        magics: magic,
        header: PRODUCT_HEADER,
        sample,
        sample_count: "n",
        time_field: "time",
        axis: None,
    }
}

const fn profile(kind: FileKind, magic: &'static [u32], sample: &'static [Item]) -> Schema {
    Schema {
        kind,
        variant: None,
        magics: magic,
        header: PROFILE_HEADER,
        sample,
        sample_count: "n",
        time_field: "time",
        axis: Some("altitudes"),
    }
}

const LWP_SAMPLE: &[Item] = &[
    Item::time("time", Scalar::I32),
    Item::rain_flag("rain_flag"),
    Item::float("lwp"),
    Item::angle("angle"),
];

pub const LWP: Schema = product(FileKind::Lwp, &[LWP_MAGIC], LWP_SAMPLE);

const IWV_SAMPLE: &[Item] = &[
    Item::time("time", Scalar::I32),
    Item::rain_flag("rain_flag"),
    Item::float("iwv"),
    Item::angle("angle"),
];

pub const IWV: Schema = product(FileKind::Iwv, &[IWV_MAGIC], IWV_SAMPLE);

/// Attenuation per frequency channel
pub const ATN: Schema = Schema {
    kind: FileKind::Atn,
    variant: None,
    magics: &[ATN_MAGIC],
    header: &[
        Item::count("n", Scalar::I32, Limit::Samples),
        Item::int("time_ref"),
        Item::int("retrieval"),
        Item::count("freq_count", Scalar::I32, Limit::Axis),
        Item::floats("frequencies", Count::Field("freq_count")),
        Item::floats("min", Count::Field("freq_count")),
        Item::floats("max", Count::Field("freq_count")),
    ],
    sample: &[
        Item::time("time", Scalar::I32),
        Item::rain_flag("rain_flag"),
        Item::floats("attenuation", Count::Field("freq_count")),
        Item::angle("angle"),
    ],
    sample_count: "n",
    time_field: "time",
    axis: Some("frequencies"),
};

const TPC_SAMPLE: &[Item] = &[
    Item::time("time", Scalar::I32),
    Item::rain_flag("rain_flag"),
    Item::floats("temperature", Count::Field("altitude_count")),
];

pub const TPC: Schema = profile(FileKind::Tpc, &[TPC_MAGIC], TPC_SAMPLE);

const TPB_SAMPLE: &[Item] = &[
    Item::time("time", Scalar::I32),
    Item::rain_flag("rain_flag"),
    Item::floats("temperature", Count::Field("altitude_count")),
];

pub const TPB: Schema = profile(FileKind::Tpb, &[TPB_MAGIC], TPB_SAMPLE);

const HPC_SAMPLE: &[Item] = &[
    Item::time("time", Scalar::I32),
    Item::rain_flag("rain_flag"),
    Item::floats("absolute_humidity", Count::Field("altitude_count")),
];

pub const HPC: Schema = profile(FileKind::Hpc, &[HPC_MAGIC], HPC_SAMPLE);

const LPR_SAMPLE: &[Item] = &[
    Item::time("time", Scalar::I32),
    Item::rain_flag("rain_flag"),
    Item::floats("liquid_water", Count::Field("altitude_count")),
];

pub const LPR: Schema = profile(FileKind::Lpr, &[LPR_MAGIC], LPR_SAMPLE);

/// Stability indices. The header lists which index each of the six
/// per-sample values holds.
pub const STA: Schema = Schema {
    kind: FileKind::Sta,
    variant: None,
    magics: &[STA_MAGIC],
    header: &[
        Item::count("n", Scalar::U32, Limit::Samples),
        Item::float("min"),
        Item::float("max"),
        Item::ints("index_types", Count::Fixed(STABILITY_INDEX_COUNT)),
        Item::uint("time_ref"),
    ],
    sample: &[
        Item::time("time", Scalar::I32),
        Item::rain_flag("rain_flag"),
        Item::floats("indices", Count::Fixed(STABILITY_INDEX_COUNT)),
    ],
    sample_count: "n",
    time_field: "time",
    axis: Some("index_types"),
};

pub const CBH: Schema = Schema {
    kind: FileKind::Cbh,
    variant: None,
    magics: &[CBH_MAGIC],
    header: &[
        Item::count("n", Scalar::U32, Limit::Samples),
        Item::float("min"),
        Item::float("max"),
        Item::uint("time_ref"),
    ],
    sample: &[
        Item::time("time", Scalar::I32),
        Item::rain_flag("rain_flag"),
        Item::float("cbh"),
    ],
    sample_count: "n",
    time_field: "time",
    axis: None,
};

pub const BLH: Schema = Schema {
    kind: FileKind::Blh,
    variant: None,
    magics: &[BLH_MAGIC],
    header: HEIGHT_HEADER,
    sample: &[
        Item::time("time", Scalar::I32),
        Item::rain_flag("rain_flag"),
        Item::float("blh"),
    ],
    sample_count: "n",
    time_field: "time",
    axis: None,
};

register_format!(LWP);
register_format!(IWV);
register_format!(ATN);
register_format!(TPC);
register_format!(TPB);
register_format!(HPC);
register_format!(LPR);
register_format!(STA);
register_format!(CBH);
register_format!(BLH);
