// Supported file kinds and the magic codes that identify them

use serde::{Deserialize, Serialize};
use std::fmt;

pub const LWP_MAGIC: u32 = 934_501_000;
pub const IWV_MAGIC: u32 = 594_811_000;
pub const ATN_MAGIC: u32 = 7_757_564;
pub const BRT_MAGIC: u32 = 666_666;
/// MET files written before the sensor-count byte was added
pub const MET_LEGACY_MAGIC: u32 = 599_658_943;
pub const MET_MAGIC: u32 = 599_658_944;
pub const TPC_MAGIC: u32 = 780_798_065;
pub const TPB_MAGIC: u32 = 459_769_847;
pub const HPC_MAGIC: u32 = 117_343_673;
pub const LPR_MAGIC: u32 = 4567;
pub const IRT_MAGIC: u32 = 671_112_496;
pub const BLB_MAGIC: u32 = 567_845_848;
pub const STA_MAGIC: u32 = 454_532;
pub const CBH_MAGIC: u32 = 67_777_499;
pub const BLH_MAGIC: u32 = 1_777_786;
pub const HKD_MAGIC: u32 = 837_854_832;
pub const ABSCAL_HIS_MAGIC: u32 = 39_583_209;
pub const LV0_MAGIC: u32 = 111_112;

/// Radiometer file kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    /// Liquid water path
    Lwp,
    /// Integrated water vapour
    Iwv,
    /// Atmospheric attenuation
    Atn,
    /// Brightness temperatures
    Brt,
    /// Surface meteorological sensors
    Met,
    /// Temperature profile, composite
    Tpc,
    /// Temperature profile, boundary layer
    Tpb,
    /// Absolute humidity profile
    Hpc,
    /// Liquid water content profile
    Lpr,
    /// Infrared radiometer temperatures
    Irt,
    /// Boundary-layer scan brightness temperatures
    Blb,
    /// Stability indices
    Sta,
    /// Cloud base height
    Cbh,
    /// Boundary layer height
    Blh,
    /// Housekeeping data
    Hkd,
    /// Absolute calibration history
    AbsCalHis,
    /// Raw detector voltages
    Lv0,
}

impl FileKind {
    pub const ALL: [FileKind; 17] = [
        FileKind::Lwp,
        FileKind::Iwv,
        FileKind::Atn,
        FileKind::Brt,
        FileKind::Met,
        FileKind::Tpc,
        FileKind::Tpb,
        FileKind::Hpc,
        FileKind::Lpr,
        FileKind::Irt,
        FileKind::Blb,
        FileKind::Sta,
        FileKind::Cbh,
        FileKind::Blh,
        FileKind::Hkd,
        FileKind::AbsCalHis,
        FileKind::Lv0,
    ];

    /// Short name as used in file extensions
    pub fn name(&self) -> &'static str {
        match self {
            FileKind::Lwp => "LWP",
            FileKind::Iwv => "IWV",
            FileKind::Atn => "ATN",
            FileKind::Brt => "BRT",
            FileKind::Met => "MET",
            FileKind::Tpc => "TPC",
            FileKind::Tpb => "TPB",
            FileKind::Hpc => "HPC",
            FileKind::Lpr => "LPR",
            FileKind::Irt => "IRT",
            FileKind::Blb => "BLB",
            FileKind::Sta => "STA",
            FileKind::Cbh => "CBH",
            FileKind::Blh => "BLH",
            FileKind::Hkd => "HKD",
            FileKind::AbsCalHis => "ABSCAL.HIS",
            FileKind::Lv0 => "LV0",
        }
    }

    /// Magic codes accepted for this kind
    pub fn magics(&self) -> &'static [u32] {
        match self {
            FileKind::Lwp => &[LWP_MAGIC],
            FileKind::Iwv => &[IWV_MAGIC],
            FileKind::Atn => &[ATN_MAGIC],
            FileKind::Brt => &[BRT_MAGIC],
            FileKind::Met => &[MET_LEGACY_MAGIC, MET_MAGIC],
            FileKind::Tpc => &[TPC_MAGIC],
            FileKind::Tpb => &[TPB_MAGIC],
            FileKind::Hpc => &[HPC_MAGIC],
            FileKind::Lpr => &[LPR_MAGIC],
            FileKind::Irt => &[IRT_MAGIC],
            FileKind::Blb => &[BLB_MAGIC],
            FileKind::Sta => &[STA_MAGIC],
            FileKind::Cbh => &[CBH_MAGIC],
            FileKind::Blh => &[BLH_MAGIC],
            FileKind::Hkd => &[HKD_MAGIC],
            FileKind::AbsCalHis => &[ABSCAL_HIS_MAGIC],
            FileKind::Lv0 => &[LV0_MAGIC],
        }
    }

    /// Kind of the layout registered for `magic`
    pub fn from_magic(magic: u32) -> Option<FileKind> {
        crate::formats::schema_for_magic(magic).map(|schema| schema.kind)
    }

    /// Map a file extension (with or without the leading dot, any case).
    ///
    /// Calibration history files are usually named `ABSCAL.HIS`, so both
    /// `HIS` and `ABSCAL.HIS` are recognised.
    pub fn from_extension(ext: &str) -> Option<FileKind> {
        let ext = ext.trim_start_matches('.').to_ascii_uppercase();
        if ext == "HIS" {
            return Some(FileKind::AbsCalHis);
        }
        FileKind::ALL.into_iter().find(|kind| kind.name() == ext)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
